//! Gateway errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("insufficient token balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("token ledger rejected the transfer: {0}")]
    Rejected(String),
}
