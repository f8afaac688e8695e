//! Per-account stake positions.

use serde::{Deserialize, Serialize};
use stakewell_types::Timestamp;

/// An open stake position of one account in one pool.
///
/// A closed position is simply absent from the engine's position map, so at
/// most one open position exists per (pool, account) pair. A second deposit
/// merges into the existing position (compounding accrued reward into
/// principal) instead of creating another one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    /// Deposited value including any compounded reward.
    pub principal: u128,

    /// Raw deposits only, excluding compounded reward. This is the portion
    /// of the pool's `total_staked` attributable to this position.
    pub deposited: u128,

    /// Time of the most recent deposit — the accrual clock.
    pub staked_at: Timestamp,
}

impl StakePosition {
    /// Open a fresh position from a first deposit.
    pub fn open(amount: u128, now: Timestamp) -> Self {
        Self {
            principal: amount,
            deposited: amount,
            staked_at: now,
        }
    }

    /// Whether the pool's lock period has elapsed for this position.
    /// Lock status is derived at call time; nothing is stored for it.
    pub fn lock_elapsed(&self, lock_period_secs: u64, now: Timestamp) -> bool {
        self.staked_at.has_elapsed(lock_period_secs, now)
    }
}
