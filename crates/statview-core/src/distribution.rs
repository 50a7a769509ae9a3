//! Point sets for theoretical distributions (PDF / PMF curves).

use std::ops::Range;

use statrs::distribution::{Binomial, Continuous, Discrete, Normal, Poisson};

use crate::error::{Result, StatError};

/// `(x, density)` pairs of `N(mu, sigma)` over `[from, to]` at `step` spacing.
pub fn normal_pdf(mu: f64, sigma: f64, from: f64, to: f64, step: f64) -> Result<Vec<(f64, f64)>> {
    let grid_ok = from.is_finite() && to.is_finite() && step.is_finite() && step > 0.0 && to >= from;
    if !grid_ok {
        return Err(StatError::InvalidParameter(format!(
            "invalid pdf grid: [{from}, {to}] step {step}"
        )));
    }
    let dist = Normal::new(mu, sigma)
        .map_err(|e| StatError::InvalidParameter(format!("normal distribution: {e}")))?;

    // Index-based so rounding never drops the last point.
    let steps = ((to - from) / step).round() as usize;
    Ok((0..=steps)
        .map(|i| {
            let x = from + i as f64 * step;
            (x, dist.pdf(x))
        })
        .collect())
}

/// `(k, P(X = k))` for `X ~ Binomial(trials, p)`, `k = 0..=trials`.
pub fn binomial_pmf(trials: u64, p: f64) -> Result<Vec<(f64, f64)>> {
    let dist = Binomial::new(p, trials)
        .map_err(|e| StatError::InvalidParameter(format!("binomial distribution: {e}")))?;
    Ok((0..=trials).map(|k| (k as f64, dist.pmf(k))).collect())
}

/// `(k, P(X = k))` for `X ~ Poisson(lambda)` over the half-open `k` range.
pub fn poisson_pmf(lambda: f64, ks: Range<u64>) -> Result<Vec<(f64, f64)>> {
    let dist = Poisson::new(lambda)
        .map_err(|e| StatError::InvalidParameter(format!("poisson distribution: {e}")))?;
    Ok(ks.map(|k| (k as f64, dist.pmf(k))).collect())
}
