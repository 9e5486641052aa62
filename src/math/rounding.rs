/// Number of decimal digits weighted sums are rounded to.
pub const WEIGHTED_SUM_DIGITS: usize = 10;

/// Rounds `x` to `digits` decimal places.
///
/// Rounding is applied to the exact decimal value of `x`, so `2.52051860955`
/// (stored slightly below the literal) rounds down. Non-finite values are
/// returned unchanged.
pub fn round_to(x: f64, digits: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.digits$}").parse().unwrap_or(x)
}
