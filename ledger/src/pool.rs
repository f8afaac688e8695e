//! Staking pools and the pool registry.

use crate::error::StakingError;
use serde::{Deserialize, Serialize};

/// A named staking bucket with its own lock period and reward rate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Free-form descriptive label.
    pub label: String,

    /// Minimum holding duration before withdrawal is permitted.
    pub lock_period_secs: u64,

    /// Percentage of principal paid per normalization period.
    pub reward_rate_percent: u128,

    /// Sum of raw deposits currently locked in this pool. Compounded reward
    /// never counts toward this total, so it equals the sum of open
    /// positions' `deposited` at all times.
    pub total_staked: u128,
}

/// Ordered, append-mostly collection of pools.
///
/// Indices are stable once assigned; pools are updated in place but never
/// removed, so the count only grows.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoolRegistry {
    pools: Vec<Pool>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new pool with nothing staked yet. Returns its index.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        lock_period_secs: u64,
        reward_rate_percent: u128,
    ) -> usize {
        self.pools.push(Pool {
            label: label.into(),
            lock_period_secs,
            reward_rate_percent,
            total_staked: 0,
        });
        self.pools.len() - 1
    }

    /// Replace the label, rate, and lock period of the pool at `index`,
    /// leaving `total_staked` untouched.
    pub fn update(
        &mut self,
        index: usize,
        label: impl Into<String>,
        reward_rate_percent: u128,
        lock_period_secs: u64,
    ) -> Result<(), StakingError> {
        let pool = self.get_mut(index)?;
        pool.label = label.into();
        pool.reward_rate_percent = reward_rate_percent;
        pool.lock_period_secs = lock_period_secs;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Pool, StakingError> {
        self.pools.get(index).ok_or(StakingError::PoolNotFound(index))
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Pool, StakingError> {
        self.pools
            .get_mut(index)
            .ok_or(StakingError::PoolNotFound(index))
    }

    /// Ordered snapshot of all pools.
    pub fn snapshot(&self) -> Vec<Pool> {
        self.pools.clone()
    }

    pub fn total_staked(&self, index: usize) -> Result<u128, StakingError> {
        Ok(self.get(index)?.total_staked)
    }
}
