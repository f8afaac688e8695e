//! The faucet engine.

use crate::error::FaucetError;
use serde::{Deserialize, Serialize};
use stakewell_access::Ownable;
use stakewell_gateway::TokenGateway;
use stakewell_types::{AccountId, Timestamp};
use std::collections::HashMap;
use tracing::debug;

/// A fixed-interval, fixed-amount dispenser.
///
/// Tracks the last successful request per account; a request inside the
/// wait window fails without touching any state. Payouts draw on the
/// gateway's custody balance, which is funded externally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaucetEngine {
    owner: Ownable,
    wait_time_secs: u64,
    payout_amount: u128,
    last_request: HashMap<AccountId, Timestamp>,
}

impl FaucetEngine {
    pub fn new(owner: AccountId, wait_time_secs: u64, payout_amount: u128) -> Self {
        Self {
            owner: Ownable::new(owner),
            wait_time_secs,
            payout_amount,
            last_request: HashMap::new(),
        }
    }

    pub fn wait_time_secs(&self) -> u64 {
        self.wait_time_secs
    }

    pub fn payout_amount(&self) -> u128 {
        self.payout_amount
    }

    /// Pay the fixed amount to `caller`, at most once per wait interval.
    ///
    /// The last-request record is written only after the transfer succeeds,
    /// so a failed payout does not consume the caller's turn.
    pub fn request_tokens(
        &mut self,
        gateway: &mut dyn TokenGateway,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<u128, FaucetError> {
        if let Some(last) = self.last_request.get(caller) {
            if !last.has_elapsed(self.wait_time_secs, now) {
                let remaining = self.wait_time_secs - last.elapsed_since(now);
                return Err(FaucetError::MustWait {
                    remaining_secs: remaining,
                });
            }
        }
        gateway.transfer(caller, self.payout_amount)?;
        self.last_request.insert(caller.clone(), now);
        debug!(%caller, amount = self.payout_amount, "faucet payout");
        Ok(self.payout_amount)
    }

    /// Owner-only: change the per-account wait interval.
    pub fn set_wait_time(&mut self, caller: &AccountId, secs: u64) -> Result<(), FaucetError> {
        self.owner.require_owner(caller)?;
        self.wait_time_secs = secs;
        Ok(())
    }

    /// Owner-only: change the fixed payout amount.
    pub fn set_payout_amount(
        &mut self,
        caller: &AccountId,
        amount: u128,
    ) -> Result<(), FaucetError> {
        self.owner.require_owner(caller)?;
        self.payout_amount = amount;
        Ok(())
    }

    /// Owner-only: push the faucet's entire remaining custody balance to
    /// the owner. Returns the drained amount.
    pub fn drain(&mut self, gateway: &mut dyn TokenGateway, caller: &AccountId) -> Result<u128, FaucetError> {
        self.owner.require_owner(caller)?;
        let amount = gateway.custody_balance();
        gateway.transfer(self.owner.owner(), amount)?;
        debug!(amount, "faucet drained");
        Ok(amount)
    }
}
