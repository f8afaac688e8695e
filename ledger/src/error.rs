//! Staking-specific errors.
//!
//! Every error aborts the triggering operation with no state retained.
//! Validation: [`ZeroStake`], [`PoolNotFound`]. Authorization: [`Access`].
//! State: [`NothingStaked`], [`LockPeriodActive`].
//!
//! [`ZeroStake`]: StakingError::ZeroStake
//! [`PoolNotFound`]: StakingError::PoolNotFound
//! [`Access`]: StakingError::Access
//! [`NothingStaked`]: StakingError::NothingStaked
//! [`LockPeriodActive`]: StakingError::LockPeriodActive

use stakewell_access::AccessError;
use stakewell_gateway::GatewayError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StakingError {
    #[error("cannot stake zero")]
    ZeroStake,

    #[error("pool {0} does not exist")]
    PoolNotFound(usize),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("nothing staked")]
    NothingStaked,

    #[error("must wait until lock period elapses ({remaining_secs}s remaining)")]
    LockPeriodActive { remaining_secs: u64 },

    #[error("arithmetic overflow in reward computation")]
    Overflow,

    #[error("token transfer failed: {0}")]
    Gateway(#[from] GatewayError),
}
