//! Staking ledger core.
//!
//! Accounts lock value into named pools for a minimum duration in exchange
//! for a time-proportional reward. Repeated deposits compound unclaimed
//! reward into principal and reset the accrual clock.
//!
//! This crate handles:
//! - The pool registry (append and in-place update, owner-gated)
//! - Per-account stake positions and their lifecycle
//! - The compounding reward calculation
//! - Custody movement through the external token gateway

pub mod engine;
pub mod error;
pub mod pool;
pub mod position;
pub mod reward;

pub use engine::StakingEngine;
pub use error::StakingError;
pub use pool::{Pool, PoolRegistry};
pub use position::StakePosition;
pub use reward::reward;
