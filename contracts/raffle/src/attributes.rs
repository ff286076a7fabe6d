//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

/// Emitted once per accepted entry
pub const EVENT_TYPE_ENTERED: &str = "entered";
pub const ATTR_PLAYER: &str = "player";

/// Emitted once the coordinator registered the randomness request of a round
pub const EVENT_TYPE_ROUND_CALCULATING: &str = "round_calculating";
pub const ATTR_REQUEST_ID: &str = "request_id";

/// Emitted once per resolved round
pub const EVENT_TYPE_WINNER_PICKED: &str = "winner_picked";
pub const ATTR_WINNER: &str = "winner";
