use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, Event, HexBinary, StdResult, Uint256, WasmMsg};

/// The attribute a coordinator uses to report the ID it assigned to a request.
///
/// The value is a decimal `u64`. Consumers read it from the events of the
/// `RequestRandomWords` sub-message.
pub const ATTR_REQUEST_ID: &str = "request_id";

/// Messages a VRF coordinator accepts from its consumers.
#[cw_serde]
pub enum VrfCoordinatorExecuteMsg {
    /// Registers a request for `num_words` random words.
    ///
    /// The coordinator answers later by executing
    /// [`VrfConsumerExecuteMsg::FulfillRandomWords`] on the sender.
    RequestRandomWords {
        /// The gas lane (a.k.a. key hash) which determines the oracle key and price tier
        key_hash: HexBinary,
        /// The subscription which pays for the request
        sub_id: u64,
        /// Blocks to wait before the randomness is generated
        min_confirmations: u16,
        /// Gas available to the consumer callback
        callback_gas_limit: u64,
        num_words: u32,
    },
}

impl VrfCoordinatorExecuteMsg {
    /// Wraps the request into an execution of the given coordinator contract.
    pub fn into_wasm_msg(self, coordinator: impl Into<String>) -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: coordinator.into(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        })
    }
}

/// The callback a consumer must accept. This should be de/serialized as a
/// variant of the consumer's larger `ExecuteMsg` enum.
#[cw_serde]
pub enum VrfConsumerExecuteMsg {
    FulfillRandomWords {
        /// The ID the coordinator assigned when the request was registered
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

impl VrfConsumerExecuteMsg {
    /// Serializes the callback so a coordinator can send it to a consumer.
    pub fn into_binary(self) -> StdResult<Binary> {
        to_json_binary(&self)
    }
}

/// Finds the request ID reported by a coordinator in the events of a sub-message.
///
/// Returns `None` if no event carries a parsable [`ATTR_REQUEST_ID`] attribute.
pub fn request_id_from_events(events: &[Event]) -> Option<u64> {
    events
        .iter()
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == ATTR_REQUEST_ID)
        .and_then(|attr| attr.value.parse::<u64>().ok())
}
