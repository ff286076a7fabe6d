use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

/// The readiness check an automation bot polls.
#[cw_serde]
#[derive(QueryResponses)]
pub enum AutomationQueryMsg {
    #[returns(CheckUpkeepResponse)]
    CheckUpkeep {
        /// Opaque data configured on the bot side
        check_data: Binary,
    },
}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    /// Opaque data the bot passes on to `PerformUpkeep`
    pub perform_data: Binary,
}

/// The state transition a bot executes after it saw `upkeep_needed == true`.
///
/// Contracts must not rely on the bot's check and re-validate on execution.
#[cw_serde]
pub enum AutomationExecuteMsg {
    PerformUpkeep { perform_data: Binary },
}
