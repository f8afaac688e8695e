//! Nullable token ledger — in-memory custody for testing.

use stakewell_gateway::{GatewayError, TokenGateway};
use stakewell_types::AccountId;
use std::collections::HashMap;

/// An in-memory token ledger implementing [`TokenGateway`].
///
/// Holds external account balances plus one custody balance, and can be told
/// to reject the next transfer to exercise the engines' failure paths.
pub struct NullTokenLedger {
    balances: HashMap<AccountId, u128>,
    custody: u128,
    reject_next_transfer: bool,
}

impl NullTokenLedger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            custody: 0,
            reject_next_transfer: false,
        }
    }

    /// Credit an external account.
    pub fn set_balance(&mut self, account: &AccountId, amount: u128) {
        self.balances.insert(account.clone(), amount);
    }

    /// Credit the custody account directly (e.g. to seed a faucet).
    pub fn fund_custody(&mut self, amount: u128) {
        self.custody += amount;
    }

    /// Make the next `transfer_from` or `transfer` fail with
    /// [`GatewayError::Rejected`].
    pub fn reject_next_transfer(&mut self) {
        self.reject_next_transfer = true;
    }

    fn check_rejection(&mut self) -> Result<(), GatewayError> {
        if self.reject_next_transfer {
            self.reject_next_transfer = false;
            return Err(GatewayError::Rejected(
                "transfer rejected by test configuration".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for NullTokenLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGateway for NullTokenLedger {
    fn transfer_from(&mut self, payer: &AccountId, amount: u128) -> Result<(), GatewayError> {
        self.check_rejection()?;
        let balance = self.balances.get(payer).copied().unwrap_or(0);
        if balance < amount {
            return Err(GatewayError::InsufficientBalance {
                needed: amount,
                available: balance,
            });
        }
        self.balances.insert(payer.clone(), balance - amount);
        self.custody += amount;
        Ok(())
    }

    fn transfer(&mut self, recipient: &AccountId, amount: u128) -> Result<(), GatewayError> {
        self.check_rejection()?;
        if self.custody < amount {
            return Err(GatewayError::InsufficientBalance {
                needed: amount,
                available: self.custody,
            });
        }
        self.custody -= amount;
        *self.balances.entry(recipient.clone()).or_insert(0) += amount;
        Ok(())
    }

    fn custody_balance(&self) -> u128 {
        self.custody
    }

    fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}
