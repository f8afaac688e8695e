//! Fundamental types for the stakewell staking ledger.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! account identities, timestamps, and engine parameters.

pub mod account;
pub mod params;
pub mod time;

pub use account::AccountId;
pub use params::StakingParams;
pub use time::Timestamp;
