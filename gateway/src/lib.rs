//! Abstract interface to the external token ledger.
//!
//! Balance custody lives outside the staking engine. Deposits are pulled
//! from a payer into the engine's custody account and payouts are pushed
//! back out; the engines depend only on this trait. Test doubles live in
//! `stakewell-nullables`.

pub mod error;

pub use error::GatewayError;

use stakewell_types::AccountId;

/// Gateway to the token ledger holding real balances.
///
/// An implementation represents one custody account: `transfer_from` pulls
/// into it, `transfer` pushes out of it.
pub trait TokenGateway {
    /// Pull `amount` from `payer` into custody.
    fn transfer_from(&mut self, payer: &AccountId, amount: u128) -> Result<(), GatewayError>;

    /// Push `amount` out of custody to `recipient`.
    fn transfer(&mut self, recipient: &AccountId, amount: u128) -> Result<(), GatewayError>;

    /// Balance currently held in custody.
    fn custody_balance(&self) -> u128;

    /// Balance of an external account. For callers and tests; the engines'
    /// own logic never consults it.
    fn balance_of(&self, account: &AccountId) -> u128;
}
