//! Summary statistics over `f64` samples.
//!
//! Every function validates its input and returns `StatError` for the
//! degenerate cases (empty input, `n <= 1` where `n - 1` is a divisor,
//! zero variance, non-finite values). A result that overflows `f64` is a
//! `StatError::NonFinite`, never a silent infinity or NaN.

use crate::error::{Result, StatError};

/// Least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl Regression {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

fn require(data: &[f64], needed: usize) -> Result<()> {
    if data.len() < needed {
        return Err(StatError::InsufficientData { needed, got: data.len() });
    }
    if let Some(i) = data.iter().position(|v| !v.is_finite()) {
        return Err(StatError::InvalidParameter(format!(
            "non-finite sample at index {i}"
        )));
    }
    Ok(())
}

fn require_pair(x: &[f64], y: &[f64], needed: usize) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch { left: x.len(), right: y.len() });
    }
    require(x, needed)?;
    require(y, needed)
}

fn finite(what: &'static str, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(StatError::NonFinite(what))
    }
}

fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    require(data, 1)?;
    finite("mean", sum(data) / data.len() as f64)
}

/// Empirical median: the lowest sample value `q` such that at least half
/// of the samples are `<= q`. The input is left untouched.
pub fn median(data: &[f64]) -> Result<f64> {
    require(data, 1)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let idx = (sorted.len() + 1) / 2 - 1;
    Ok(sorted[idx])
}

/// Unbiased sample variance (divides by `n - 1`).
pub fn variance(data: &[f64]) -> Result<f64> {
    require(data, 2)?;
    let m = finite("mean", sum(data) / data.len() as f64)?;
    let ss: f64 = data.iter().map(|v| (v - m) * (v - m)).sum();
    finite("variance", ss / (data.len() - 1) as f64)
}

/// Sample standard deviation.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

fn de_mean(data: &[f64]) -> Vec<f64> {
    let m = sum(data) / data.len() as f64;
    data.iter().map(|v| v - m).collect()
}

/// Sample covariance: de-meaned dot product over `n - 1`.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    require_pair(x, y, 2)?;
    let dx = de_mean(x);
    let dy = de_mean(y);
    let dot: f64 = dx.iter().zip(&dy).map(|(a, b)| a * b).sum();
    finite("covariance", dot / (x.len() - 1) as f64)
}

/// Pearson correlation: covariance normalized by both standard deviations.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    let cov = covariance(x, y)?;
    let sx = std_dev(x)?;
    let sy = std_dev(y)?;
    if sx == 0.0 {
        return Err(StatError::ZeroVariance("x"));
    }
    if sy == 0.0 {
        return Err(StatError::ZeroVariance("y"));
    }
    finite("correlation", cov / sx / sy)
}

/// Simple linear regression of `y` on `x` with its coefficient of
/// determination.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<Regression> {
    require_pair(x, y, 2)?;
    let var_x = variance(x)?;
    if var_x == 0.0 {
        return Err(StatError::ZeroVariance("x"));
    }
    let slope = finite("slope", covariance(x, y)? / var_x)?;
    let mean_y = mean(y)?;
    let intercept = finite("intercept", mean_y - slope * mean(x)?)?;

    let ss_tot: f64 = y.iter().map(|v| (v - mean_y) * (v - mean_y)).sum();
    if ss_tot == 0.0 {
        return Err(StatError::ZeroVariance("y"));
    }
    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| {
            let r = yi - (slope * xi + intercept);
            r * r
        })
        .sum();

    let r_squared = finite("r_squared", 1.0 - ss_res / ss_tot)?;
    Ok(Regression { slope, intercept, r_squared })
}
