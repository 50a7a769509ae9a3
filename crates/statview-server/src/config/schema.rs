use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use statview_core::sample::{NormalSpec, MAX_SAMPLES};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub app: AppSection,

    #[serde(default)]
    pub chart: ChartSection,

    #[serde(default)]
    pub sampling: SamplingSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            app: AppSection::default(),
            chart: ChartSection::default(),
            sampling: SamplingSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AppError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.chart.validate()?;
        self.sampling.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen(), static_dir: default_static_dir() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            AppError::Config(format!("server.listen must be a valid socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_true")]
    pub in_production: bool,

    #[serde(default = "default_true")]
    pub use_cache: bool,
}

impl Default for AppSection {
    fn default() -> Self {
        Self { in_production: true, use_cache: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSection {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_bins")]
    pub histogram_bins: usize,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self { width: default_width(), height: default_height(), histogram_bins: default_bins() }
    }
}

impl ChartSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=4000).contains(&self.width) {
            return Err(AppError::Config("chart.width must be between 100 and 4000".into()));
        }
        if !(100..=4000).contains(&self.height) {
            return Err(AppError::Config("chart.height must be between 100 and 4000".into()));
        }
        if !(1..=500).contains(&self.histogram_bins) {
            return Err(AppError::Config(
                "chart.histogram_bins must be between 1 and 500".into(),
            ));
        }
        Ok(())
    }
}

fn default_width() -> u32 {
    statview_core::chart::DEFAULT_WIDTH
}
fn default_height() -> u32 {
    statview_core::chart::DEFAULT_HEIGHT
}
fn default_bins() -> usize {
    statview_core::chart::DEFAULT_BINS
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingSection {
    #[serde(default = "default_income")]
    pub income: NormalSampling,

    #[serde(default = "default_spread")]
    pub spread: NormalSampling,

    #[serde(default)]
    pub page_speed: PageSpeedSampling,

    #[serde(default)]
    pub regression: RegressionSampling,
}

impl Default for SamplingSection {
    fn default() -> Self {
        Self {
            income: default_income(),
            spread: default_spread(),
            page_speed: PageSpeedSampling::default(),
            regression: RegressionSampling::default(),
        }
    }
}

impl SamplingSection {
    pub fn validate(&self) -> Result<()> {
        self.income.validate("sampling.income")?;
        self.spread.validate("sampling.spread")?;
        check_samples("sampling.page_speed.samples", self.page_speed.samples)?;
        check_samples("sampling.regression.samples", self.regression.samples)?;
        Ok(())
    }
}

fn check_samples(field: &str, n: usize) -> Result<()> {
    if !(2..=MAX_SAMPLES).contains(&n) {
        return Err(AppError::Config(format!(
            "{field} must be between 2 and {MAX_SAMPLES}"
        )));
    }
    Ok(())
}

/// A normal sample: `samples` draws from `N(mean, std_dev)`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalSampling {
    pub samples: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalSampling {
    pub fn spec(&self) -> NormalSpec {
        NormalSpec::new(self.samples, self.mean, self.std_dev)
    }

    fn validate(&self, field: &str) -> Result<()> {
        check_samples(&format!("{field}.samples"), self.samples)?;
        self.spec()
            .validate()
            .map_err(|e| AppError::Config(format!("{field}: {e}")))
    }
}

fn default_income() -> NormalSampling {
    NormalSampling { samples: 10_000, mean: 27_000.0, std_dev: 15_000.0 }
}
fn default_spread() -> NormalSampling {
    NormalSampling { samples: 10_000, mean: 100.0, std_dev: 100.0 }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpeedSampling {
    #[serde(default = "default_pair_samples")]
    pub samples: usize,
}

impl Default for PageSpeedSampling {
    fn default() -> Self {
        Self { samples: default_pair_samples() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegressionSampling {
    #[serde(default = "default_pair_samples")]
    pub samples: usize,

    #[serde(default)]
    pub seed: u64,
}

impl Default for RegressionSampling {
    fn default() -> Self {
        Self { samples: default_pair_samples(), seed: 0 }
    }
}

fn default_pair_samples() -> usize {
    1000
}
