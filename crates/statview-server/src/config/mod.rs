//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

pub use schema::{
    AppSection, ChartSection, NormalSampling, PageSpeedSampling, RegressionSampling,
    SamplingSection, ServerSection, ServiceConfig,
};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig =
        serde_yaml::from_str(s).map_err(|e| AppError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
