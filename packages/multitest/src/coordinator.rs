//! A VRF coordinator stand-in for multitest.
//!
//! Requests get incrementing IDs starting at 1. Nothing is answered automatically,
//! the test decides when and with which words a request is fulfilled.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Response,
    StdError, StdResult, Uint256, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use raffle_protocol::{VrfConsumerExecuteMsg, ATTR_REQUEST_ID};

const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");
/// Outstanding requests by ID
const REQUESTS: Map<u64, Addr> = Map::new("requests");

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Same shape as `VrfCoordinatorExecuteMsg::RequestRandomWords`
    RequestRandomWords {
        key_hash: HexBinary,
        sub_id: u64,
        min_confirmations: u16,
        callback_gas_limit: u64,
        num_words: u32,
    },
    /// Delivers the given words to the consumer of an outstanding request
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
pub enum QueryMsg {
    /// The consumer of an outstanding request
    Consumer { request_id: u64 },
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    NEXT_REQUEST_ID.save(deps.storage, &1)?;
    Ok(Response::new())
}

pub fn execute(deps: DepsMut, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    match msg {
        ExecuteMsg::RequestRandomWords { .. } => {
            let request_id = NEXT_REQUEST_ID.load(deps.storage)?;
            NEXT_REQUEST_ID.save(deps.storage, &(request_id + 1))?;
            REQUESTS.save(deps.storage, request_id, &info.sender)?;
            Ok(Response::new()
                .add_attribute("action", "request_random_words")
                .add_attribute(ATTR_REQUEST_ID, request_id.to_string()))
        }
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => {
            let consumer = REQUESTS
                .may_load(deps.storage, request_id)?
                .ok_or_else(|| StdError::generic_err("nonexistent request"))?;
            REQUESTS.remove(deps.storage, request_id);

            let callback = VrfConsumerExecuteMsg::FulfillRandomWords {
                request_id,
                random_words,
            };
            let msg = WasmMsg::Execute {
                contract_addr: consumer.into(),
                msg: callback.into_binary()?,
                funds: vec![],
            };
            Ok(Response::new()
                .add_message(msg)
                .add_attribute("action", "fulfill_random_words")
                .add_attribute(ATTR_REQUEST_ID, request_id.to_string()))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Consumer { request_id } => {
            to_json_binary(&REQUESTS.may_load(deps.storage, request_id)?)
        }
    }
}
