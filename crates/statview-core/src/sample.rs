//! Normal sample generation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, StatError};

/// Upper bound on a single generated sample.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Largest accepted `|mean|` and `std_dev`. Keeps sums of squares over
/// `MAX_SAMPLES` values well inside `f64` range.
pub const MAX_MAGNITUDE: f64 = 1e15;

/// Where the generator's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// OS entropy; every run differs.
    Entropy,
    /// Fixed seed; every run yields the same sample.
    Fixed(u64),
}

/// Parameters of a normal sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalSpec {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalSpec {
    pub fn new(n: usize, mean: f64, std_dev: f64) -> Self {
        Self { n, mean, std_dev }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SAMPLES).contains(&self.n) {
            return Err(StatError::InvalidParameter(format!(
                "n must be between 1 and {MAX_SAMPLES}, got {}",
                self.n
            )));
        }
        if !self.mean.is_finite() || self.mean.abs() > MAX_MAGNITUDE {
            return Err(StatError::InvalidParameter(format!(
                "mean must be finite with |mean| <= {MAX_MAGNITUDE:e}, got {}",
                self.mean
            )));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 || self.std_dev > MAX_MAGNITUDE {
            return Err(StatError::InvalidParameter(format!(
                "std_dev must be in (0, {MAX_MAGNITUDE:e}], got {}",
                self.std_dev
            )));
        }
        Ok(())
    }
}

/// Seeded pseudo-random sample generator.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn new(seed: Seed) -> Self {
        let rng = match seed {
            Seed::Entropy => StdRng::from_entropy(),
            Seed::Fixed(s) => StdRng::seed_from_u64(s),
        };
        Self { rng }
    }

    /// Draw exactly `spec.n` values from `N(spec.mean, spec.std_dev)`.
    pub fn normal(&mut self, spec: NormalSpec) -> Result<Vec<f64>> {
        spec.validate()?;
        let dist = Normal::new(spec.mean, spec.std_dev)
            .map_err(|e| StatError::InvalidParameter(format!("normal distribution: {e}")))?;
        Ok(dist.sample_iter(&mut self.rng).take(spec.n).collect())
    }
}
