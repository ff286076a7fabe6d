mod automation;
mod vrf;

pub use automation::{AutomationExecuteMsg, AutomationQueryMsg, CheckUpkeepResponse};
pub use vrf::{
    request_id_from_events, VrfConsumerExecuteMsg, VrfCoordinatorExecuteMsg, ATTR_REQUEST_ID,
};

/// Number of confirmations a coordinator waits for before answering, unless configured otherwise.
pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;

/// A raffle only ever needs a single word to pick its winner.
pub const NUM_WORDS: u32 = 1;
