//! Integer percentage rounding.
//!
//! Completion rates and win rates are whole percentages. They are computed
//! with integer arithmetic so that `round(100 * part / whole)` rounds halves
//! up exactly, without floating point drift (`100 * 1 / 8 = 12.5 → 13`).

/// Compute `round(100 * part / whole)` with round-half-up.
///
/// Returns `0` when `whole == 0` instead of dividing by zero.
///
/// # Example
///
/// ```
/// use bidtrack_domain::core::percent::round_half_up_percent;
///
/// assert_eq!(round_half_up_percent(11, 13), 85);
/// assert_eq!(round_half_up_percent(1, 8), 13);
/// assert_eq!(round_half_up_percent(0, 0), 0);
/// ```
pub fn round_half_up_percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    // round(100p / w) == floor((200p + w) / 2w) for non-negative integers
    let numerator = u128::from(part) * 200 + u128::from(whole);
    let denominator = u128::from(whole) * 2;
    (numerator / denominator).min(u128::from(u32::MAX)) as u32
}

/// Same as [`round_half_up_percent`] but capped at 100.
///
/// Used wherever `part` is a subset count of `whole`, so the cap only
/// matters for malformed inputs.
pub fn bounded_percent(part: u64, whole: u64) -> u32 {
    round_half_up_percent(part.min(whole), whole)
}
