use thiserror::Error;

use cosmwasm_std::{StdError, Uint128};

use crate::state::RaffleState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // Instantiation
    #[error("Coordinator address is not valid")]
    InvalidCoordinatorAddress,

    #[error("Entrance fee must not be zero")]
    InvalidEntranceFee,

    // Entering
    #[error("Insufficient payment.")]
    InsufficientPayment,

    #[error("Funds in denom {denom} are not accepted")]
    InvalidFunds { denom: String },

    #[error("Raffle is not open")]
    RoundNotOpen,

    // Upkeep
    #[error("Upkeep not needed. Pot: {pot}, players: {players}, state: {state}")]
    UpkeepNotNeeded {
        pot: Uint128,
        players: u32,
        state: RaffleState,
    },

    #[error("Coordinator did not report a request ID")]
    MissingRequestId,

    // Fulfillment
    #[error("Only the VRF coordinator can fulfill randomness requests")]
    UnauthorizedFulfillment,

    #[error("Request {request_id} is not outstanding")]
    UnknownRequest { request_id: u64 },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("Paying out the prize failed")]
    PayoutFailed,

    // Queries
    #[error("No player at index {index}")]
    IndexOutOfRange { index: u32 },

    #[error("Unknown reply ID {id}")]
    UnknownReplyId { id: u64 },

    // Migration
    #[error("Cannot migrate from contract {previous}")]
    ContractNameMismatch { previous: String },
}
