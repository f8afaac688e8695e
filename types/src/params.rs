//! Engine parameters.

use serde::{Deserialize, Serialize};

/// Seconds in one year (365 days), the period over which reward rates are
/// quoted by default.
pub const ONE_YEAR_SECS: u64 = 31_536_000;

/// Parameters for the staking engine.
///
/// The normalization period is the duration a pool's `reward_rate_percent`
/// is quoted over: a 30% pool pays 30% of principal per normalization
/// period, pro-rated linearly. It is an explicit parameter (rather than a
/// hard-wired constant) so deployments quoting rates over other periods can
/// say so directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// The period, in seconds, over which `reward_rate_percent` is quoted.
    pub normalization_period_secs: u64,
}

impl StakingParams {
    /// Annually quoted rates — the standard configuration.
    pub fn annual() -> Self {
        Self {
            normalization_period_secs: ONE_YEAR_SECS,
        }
    }
}

impl Default for StakingParams {
    fn default() -> Self {
        Self::annual()
    }
}
