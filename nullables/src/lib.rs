//! Nullable infrastructure for deterministic testing.
//!
//! The engines' two external dependencies — the clock and the token ledger —
//! are supplied by the caller, so tests swap in these implementations:
//! time only moves when told to, and token custody is an in-memory map with
//! programmable failure.

pub mod clock;
pub mod token_ledger;

pub use clock::NullClock;
pub use token_ledger::NullTokenLedger;
