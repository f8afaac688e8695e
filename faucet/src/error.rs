//! Faucet-specific errors.

use stakewell_access::AccessError;
use stakewell_gateway::GatewayError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaucetError {
    #[error("must wait between requests ({remaining_secs}s remaining)")]
    MustWait { remaining_secs: u64 },

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("token transfer failed: {0}")]
    Gateway(#[from] GatewayError),
}
