//! Single-owner capability gate.
//!
//! Both the staking engine and the faucet gate their administrative entry
//! points on one fixed owner identity. The check lives here once so the two
//! engines cannot drift apart in how they enforce it.

use serde::{Deserialize, Serialize};
use stakewell_types::AccountId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("caller is not owner")]
    NotOwner,
}

/// A capability anchored to a single owner identity, fixed at construction.
///
/// There is deliberately no role hierarchy and no ownership transfer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ownable {
    owner: AccountId,
}

impl Ownable {
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Fail with `NotOwner` unless `caller` is the fixed owner.
    ///
    /// Engines call this before touching any state.
    pub fn require_owner(&self, caller: &AccountId) -> Result<(), AccessError> {
        if *caller == self.owner {
            Ok(())
        } else {
            Err(AccessError::NotOwner)
        }
    }
}
