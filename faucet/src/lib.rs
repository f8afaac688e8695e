//! Rate-limited token dispenser.
//!
//! Pays a fixed amount to any account, at most once per wait interval per
//! account. No accrual, no compounding. Configuration setters and draining
//! are gated on the same single-owner capability the staking engine uses.

pub mod engine;
pub mod error;

pub use engine::FaucetEngine;
pub use error::FaucetError;
