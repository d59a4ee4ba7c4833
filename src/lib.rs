pub mod contract;
mod error;
pub mod external;
pub mod msg;
pub mod sale;
pub mod state;

pub use crate::error::ContractError;
