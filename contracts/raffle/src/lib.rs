pub mod attributes;
pub mod contract;
pub mod error;
pub mod msg;
mod payment;
mod payout;
mod selection;
pub mod state;

pub use crate::error::ContractError;
pub use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
