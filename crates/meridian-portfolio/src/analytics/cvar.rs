//! Empirical conditional value at risk.
//!
//! CVaR (expected shortfall) is the mean of the worst-performing tail of a
//! return distribution, a tail-risk measure more sensitive than plain
//! value at risk. The estimator here is the empirical one: sort the sample
//! ascending and average the slice at or below the cutoff quantile.
//!
//! Numerical note: like every empirical tail metric, the estimate is
//! sample-size sensitive; the portfolio layer refuses to compute it on
//! less than a trading year of history.

/// Empirical conditional value at risk of a return sample.
///
/// The tail is `returns[..=⌊(n − 1) × cutoff⌋]` after an ascending sort,
/// so a 5% cutoff over 252 daily returns averages the worst 13
/// observations. Returns NaN for an empty sample.
///
/// # Examples
/// ```rust
/// use meridian_portfolio::analytics::conditional_value_at_risk;
///
/// let returns = [-0.02, -0.01, 0.005, 0.01, -0.002];
/// let cvar = conditional_value_at_risk(&returns, 0.05);
/// assert_eq!(cvar, -0.02);
/// ```
#[must_use]
pub fn conditional_value_at_risk(returns: &[f64], cutoff: f64) -> f64 {
    debug_assert!((0.0..1.0).contains(&cutoff), "cutoff must lie in [0, 1)");
    if returns.is_empty() {
        return f64::NAN;
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    let cutoff_index = ((sorted.len() - 1) as f64 * cutoff) as usize;
    let tail = &sorted[..=cutoff_index];
    tail.iter().sum::<f64>() / tail.len() as f64
}

/// Reduces a per-asset return matrix to a single portfolio return series:
/// the row-wise dot product with the weight vector.
///
/// Weights must be aligned to the matrix's column order. Ragged rows are a
/// programming error and are rejected by debug assertion.
#[must_use]
pub fn weighted_return_series(returns: &[Vec<f64>], weights: &[f64]) -> Vec<f64> {
    returns
        .iter()
        .map(|row| {
            debug_assert_eq!(row.len(), weights.len(), "row width must match weights");
            row.iter().zip(weights).map(|(r, w)| r * w).sum()
        })
        .collect()
}
