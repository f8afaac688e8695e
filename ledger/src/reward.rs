//! Time-proportional reward calculation.

/// Compute the reward accrued on `principal` over `elapsed_secs`.
///
/// ```text
/// reward = floor(principal × rate% × elapsed / (100 × normalization_period))
/// ```
///
/// `rate_percent` is quoted over `normalization_period_secs` (one year in
/// the standard configuration). Integer division truncates toward zero, so
/// a position earns nothing for zero elapsed time and dust below one raw
/// unit is dropped rather than rounded up.
///
/// Pure and deterministic. Returns `None` if the intermediate product
/// overflows `u128` or the normalization period is zero; callers surface
/// that as an overflow error.
pub fn reward(
    principal: u128,
    rate_percent: u128,
    elapsed_secs: u64,
    normalization_period_secs: u64,
) -> Option<u128> {
    let numerator = principal
        .checked_mul(rate_percent)?
        .checked_mul(elapsed_secs as u128)?;
    let denominator = 100u128.checked_mul(normalization_period_secs as u128)?;
    if denominator == 0 {
        return None;
    }
    Some(numerator / denominator)
}
