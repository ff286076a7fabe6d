use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, HexBinary, Timestamp, Uint256};
use raffle_protocol::CheckUpkeepResponse;

use crate::state::{Config, RaffleState, RoundOutcome};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the VRF coordinator
    pub vrf_coordinator: String,
    /// The minimum payment per entry. Must not be zero.
    pub entrance_fee: Coin,
    /// The gas lane (key hash) to request randomness on
    pub gas_lane: HexBinary,
    pub subscription_id: u64,
    /// Gas available to the randomness callback
    pub callback_gas_limit: u64,
    /// Minimum number of seconds between two resolutions
    pub interval: u64,
    /// Confirmations the coordinator waits for. Defaults to 3.
    pub request_confirmations: Option<u16>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buys an entry into the current round. The entrance fee must be sent as funds.
    EnterRaffle {},
    /// Starts resolving the current round if it is ready.
    /// Called by an automation bot, but anyone may call it.
    PerformUpkeep { perform_data: Binary },
    /// The randomness callback. Only accepted from the VRF coordinator.
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the config state
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Coin)]
    EntranceFee {},
    /// Minimum number of seconds between two resolutions
    #[returns(u64)]
    Interval {},
    #[returns(RaffleState)]
    RaffleState {},
    /// Number of entries in the current round
    #[returns(u32)]
    NumberOfPlayers {},
    /// The entry at the given position of the current round
    #[returns(Addr)]
    Player { index: u32 },
    /// Entries of the current round in entry order
    #[returns(PlayersResponse)]
    Players {
        /// The position after which to start
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Option<Addr>)]
    RecentWinner {},
    /// Resolution time of the last round
    #[returns(Timestamp)]
    LatestTimestamp {},
    /// Funds collected in the current round
    #[returns(Coin)]
    Pot {},
    /// The outstanding randomness request, if any
    #[returns(Option<u64>)]
    PendingRequest {},
    #[returns(u32)]
    NumWords {},
    #[returns(u16)]
    RequestConfirmations {},
    /// The outcome of a resolved round
    #[returns(RoundResponse)]
    Round { round: u64 },
    #[returns(RoundsResponse)]
    Rounds {
        /// The round after which to start
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Checks if the round can be resolved now
    #[returns(CheckUpkeepResponse)]
    CheckUpkeep { check_data: Binary },
}

// We define a custom struct for each query response
pub type ConfigResponse = Config;

#[cw_serde]
pub struct PlayersResponse {
    pub players: Vec<Addr>,
}

#[cw_serde]
pub struct RoundResponse {
    pub round: u64,
    /// `None` if the round has not been resolved yet
    pub outcome: Option<RoundOutcome>,
}

#[cw_serde]
pub struct QueriedRound {
    pub round: u64,
    pub outcome: RoundOutcome,
}

#[cw_serde]
pub struct RoundsResponse {
    pub rounds: Vec<QueriedRound>,
}
