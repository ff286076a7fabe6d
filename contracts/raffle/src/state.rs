use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, HexBinary, StdResult, Storage, Timestamp, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The minimum payment per entry. Its denom is the only one the raffle accepts.
    pub entrance_fee: Coin,
    /// Minimum number of seconds between two resolutions
    pub interval: u64,
    /// The VRF coordinator. The only address allowed to deliver randomness.
    pub vrf_coordinator: Addr,
    /// The gas lane (key hash) used for randomness requests
    pub gas_lane: HexBinary,
    pub subscription_id: u64,
    pub callback_gas_limit: u64,
    /// Confirmations the coordinator waits for before answering
    pub request_confirmations: u16,
    pub num_words: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
#[derive(Copy, Eq)]
pub enum RaffleState {
    /// Accepting entries
    Open,
    /// A randomness request is outstanding
    Calculating,
}

impl fmt::Display for RaffleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaffleState::Open => write!(f, "open"),
            RaffleState::Calculating => write!(f, "calculating"),
        }
    }
}

/// Everything about the current round that changes over time
#[cw_serde]
pub struct Status {
    pub state: RaffleState,
    /// Number of the current round, starting at 1
    pub round: u64,
    /// Number of entries in the current round
    pub players: u32,
    /// Funds collected in the current round, in the entrance fee denom
    pub pot: Uint128,
    /// Resolution time of the last round. Instantiation time before the first one.
    pub last_timestamp: Timestamp,
    /// The coordinator's request ID while calculating
    pub pending_request: Option<u64>,
    pub recent_winner: Option<Addr>,
}

impl Status {
    /// The readiness predicate shared by the upkeep check and the upkeep execution.
    pub fn is_ready(&self, config: &Config, now: Timestamp) -> bool {
        let is_open = self.state == RaffleState::Open;
        let elapsed = now.nanos().saturating_sub(self.last_timestamp.nanos());
        let time_passed = elapsed / 1_000_000_000 >= config.interval;
        let has_players = self.players > 0;
        let has_balance = !self.pot.is_zero();
        is_open && time_passed && has_players && has_balance
    }
}

pub const STATUS: Item<Status> = Item::new("status");

/// Entries by (round, position). Duplicates are separate entries.
pub const PLAYERS: Map<(u64, u32), Addr> = Map::new("players");

/// Appends a player to the current round
pub fn players_push(storage: &mut dyn Storage, status: &mut Status, player: &Addr) -> StdResult<()> {
    PLAYERS.save(storage, (status.round, status.players), player)?;
    status.players += 1;
    Ok(())
}

/// Gets the player at `index` in the current round
pub fn player_at(storage: &dyn Storage, status: &Status, index: u32) -> StdResult<Option<Addr>> {
    if index >= status.players {
        return Ok(None);
    }
    PLAYERS.may_load(storage, (status.round, index))
}

/// The result of a resolved round
#[cw_serde]
pub struct RoundOutcome {
    pub winner: Addr,
    /// The full pot sent to the winner
    pub prize: Coin,
    pub players: u32,
    pub request_id: u64,
    /// The word the winner index was derived from
    pub random_word: Uint256,
    pub resolved: Timestamp,
}

/// A map from round number to outcome
pub const ROUNDS: Map<u64, RoundOutcome> = Map::new("rounds");
