use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use raffle_protocol::{
    AutomationExecuteMsg, AutomationQueryMsg, CheckUpkeepResponse, VrfConsumerExecuteMsg,
    VrfCoordinatorExecuteMsg,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(VrfCoordinatorExecuteMsg), &out_dir);
    export_schema(&schema_for!(VrfConsumerExecuteMsg), &out_dir);
    export_schema(&schema_for!(AutomationQueryMsg), &out_dir);
    export_schema(&schema_for!(AutomationExecuteMsg), &out_dir);
    export_schema(&schema_for!(CheckUpkeepResponse), &out_dir);
}
