//! The staking engine — owner-gated pool administration, deposit
//! compounding, and lock-enforced withdrawal.

use crate::error::StakingError;
use crate::pool::{Pool, PoolRegistry};
use crate::position::StakePosition;
use crate::reward::reward;
use serde::{Deserialize, Serialize};
use stakewell_access::Ownable;
use stakewell_gateway::TokenGateway;
use stakewell_types::{AccountId, StakingParams, Timestamp};
use std::collections::HashMap;
use tracing::debug;

/// The staking ledger.
///
/// Owns the pool registry and the per-account position store. Custody of
/// actual token balances stays with the external ledger, reached through the
/// [`TokenGateway`] passed into each operation. Time is likewise passed in:
/// every public operation reads `now` exactly once, from its caller.
///
/// Each operation runs to completion against `&mut self` and either commits
/// fully or leaves no observable state change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StakingEngine {
    owner: Ownable,
    params: StakingParams,
    registry: PoolRegistry,
    positions: HashMap<(usize, AccountId), StakePosition>,
}

impl StakingEngine {
    pub fn new(owner: AccountId, params: StakingParams) -> Self {
        Self {
            owner: Ownable::new(owner),
            params,
            registry: PoolRegistry::new(),
            positions: HashMap::new(),
        }
    }

    pub fn owner(&self) -> &AccountId {
        self.owner.owner()
    }

    pub fn params(&self) -> &StakingParams {
        &self.params
    }

    // ── Pool administration (owner-gated) ────────────────────────────────

    /// Append a new pool. Owner-only. Returns the new pool's index.
    pub fn add_pool(
        &mut self,
        caller: &AccountId,
        label: impl Into<String>,
        lock_period_secs: u64,
        reward_rate_percent: u128,
    ) -> Result<usize, StakingError> {
        self.owner.require_owner(caller)?;
        let index = self
            .registry
            .add(label, lock_period_secs, reward_rate_percent);
        debug!(pool_index = index, lock_period_secs, "pool added");
        Ok(index)
    }

    /// Replace the label, rate, and lock period of an existing pool in
    /// place. Owner-only; `total_staked` is untouched.
    pub fn set_pool(
        &mut self,
        caller: &AccountId,
        index: usize,
        label: impl Into<String>,
        reward_rate_percent: u128,
        lock_period_secs: u64,
    ) -> Result<(), StakingError> {
        self.owner.require_owner(caller)?;
        self.registry
            .update(index, label, reward_rate_percent, lock_period_secs)?;
        debug!(pool_index = index, "pool updated");
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn pool_count(&self) -> usize {
        self.registry.len()
    }

    /// Ordered snapshot of all pools.
    pub fn pools(&self) -> Vec<Pool> {
        self.registry.snapshot()
    }

    pub fn pool_total_staked(&self, index: usize) -> Result<u128, StakingError> {
        self.registry.total_staked(index)
    }

    /// The caller's open position in a pool, if any.
    pub fn position(&self, pool_index: usize, account: &AccountId) -> Option<&StakePosition> {
        self.positions.get(&(pool_index, account.clone()))
    }

    // ── Staking ──────────────────────────────────────────────────────────

    /// Deposit `amount` into a pool, compounding any accrued reward on an
    /// existing position into principal and resetting the accrual clock.
    ///
    /// The pool's `total_staked` grows by exactly the raw deposit; the
    /// compounded portion never counts toward it.
    pub fn stake(
        &mut self,
        gateway: &mut dyn TokenGateway,
        caller: &AccountId,
        amount: u128,
        pool_index: usize,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        if amount == 0 {
            return Err(StakingError::ZeroStake);
        }
        let pool = self.registry.get(pool_index)?;
        let rate = pool.reward_rate_percent;
        let new_total = pool
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;

        let key = (pool_index, caller.clone());
        let next = match self.positions.get(&key) {
            Some(pos) => {
                let elapsed = pos.staked_at.elapsed_since(now);
                let accrued = reward(
                    pos.principal,
                    rate,
                    elapsed,
                    self.params.normalization_period_secs,
                )
                .ok_or(StakingError::Overflow)?;
                let principal = pos
                    .principal
                    .checked_add(accrued)
                    .and_then(|p| p.checked_add(amount))
                    .ok_or(StakingError::Overflow)?;
                let deposited = pos
                    .deposited
                    .checked_add(amount)
                    .ok_or(StakingError::Overflow)?;
                StakePosition {
                    principal,
                    deposited,
                    staked_at: now,
                }
            }
            None => StakePosition::open(amount, now),
        };

        // Pull the deposit only after all arithmetic has succeeded, and
        // commit only after the pull has: either everything happens or
        // nothing does.
        gateway.transfer_from(caller, amount)?;

        self.registry.get_mut(pool_index)?.total_staked = new_total;
        self.positions.insert(key, next);
        debug!(%caller, amount, pool_index, "stake");
        Ok(())
    }

    /// Withdraw the caller's whole position plus accrued reward.
    ///
    /// Fails while the pool's lock period is still running. Internal state
    /// is mutated before the external payout call, so a reentrant call from
    /// the token ledger observes the position as already closed; if the
    /// payout itself fails, the prior state is restored exactly.
    pub fn unstake(
        &mut self,
        gateway: &mut dyn TokenGateway,
        caller: &AccountId,
        pool_index: usize,
        now: Timestamp,
    ) -> Result<u128, StakingError> {
        let key = (pool_index, caller.clone());
        let pos = self
            .positions
            .get(&key)
            .ok_or(StakingError::NothingStaked)?;
        let pool = self.registry.get(pool_index)?;

        let elapsed = pos.staked_at.elapsed_since(now);
        if !pos.lock_elapsed(pool.lock_period_secs, now) {
            return Err(StakingError::LockPeriodActive {
                remaining_secs: pool.lock_period_secs - elapsed,
            });
        }
        let accrued = reward(
            pos.principal,
            pool.reward_rate_percent,
            elapsed,
            self.params.normalization_period_secs,
        )
        .ok_or(StakingError::Overflow)?;
        let payout = pos
            .principal
            .checked_add(accrued)
            .ok_or(StakingError::Overflow)?;
        let total_before = pool.total_staked;
        let new_total = total_before
            .checked_sub(pos.deposited)
            .ok_or(StakingError::Overflow)?;

        // Effects before interaction: close the position and release its
        // raw deposits from the pool total first.
        let pos = self
            .positions
            .remove(&key)
            .ok_or(StakingError::NothingStaked)?;
        self.registry.get_mut(pool_index)?.total_staked = new_total;

        if let Err(err) = gateway.transfer(caller, payout) {
            // Atomic failure: restore the position and pool total exactly.
            self.registry.get_mut(pool_index)?.total_staked = total_before;
            self.positions.insert(key, pos);
            return Err(err.into());
        }
        debug!(%caller, payout, pool_index, "unstake");
        Ok(payout)
    }
}
