//! Single-sample summaries: mean, median, standard deviation / variance.

use serde::Serialize;
use serde_json::Value;

use statview_core::error::{Result, StatError};
use statview_core::sample::{NormalSpec, Sampler, Seed};
use statview_core::stats;

use super::{to_json, ChartSettings, Png};
use crate::dispatch::{SampleOverrides, StatEndpoint};

fn draw(base: NormalSpec, overrides: &SampleOverrides) -> Result<Vec<f64>> {
    Sampler::new(Seed::Entropy).normal(overrides.apply(base))
}

/// Overflow on a sample shaped by query overrides is a bad parameter.
fn blame_overrides<T>(overrides: &SampleOverrides, res: Result<T>) -> Result<T> {
    match res {
        Err(StatError::NonFinite(what)) if !overrides.is_empty() => Err(StatError::InvalidParameter(
            format!("{what} overflows for the requested sample parameters"),
        )),
        other => other,
    }
}

#[derive(Debug, Serialize)]
pub struct MeanResponse {
    pub mean_png: Png,
    pub mean: f64,
}

pub struct MeanEndpoint {
    sample: NormalSpec,
    chart: ChartSettings,
}

impl MeanEndpoint {
    pub fn new(sample: NormalSpec, chart: ChartSettings) -> Self {
        Self { sample, chart }
    }
}

impl StatEndpoint for MeanEndpoint {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn accepts_overrides(&self) -> bool {
        true
    }

    fn run(&self, overrides: &SampleOverrides) -> Result<Value> {
        let incomes = draw(self.sample, overrides)?;
        to_json(&MeanResponse {
            mean: blame_overrides(overrides, stats::mean(&incomes))?,
            mean_png: self.chart.histogram_png(&incomes)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MedianResponse {
    pub median_png: Png,
    pub median: f64,
}

pub struct MedianEndpoint {
    sample: NormalSpec,
    chart: ChartSettings,
}

impl MedianEndpoint {
    pub fn new(sample: NormalSpec, chart: ChartSettings) -> Self {
        Self { sample, chart }
    }
}

impl StatEndpoint for MedianEndpoint {
    fn name(&self) -> &'static str {
        "median"
    }

    fn accepts_overrides(&self) -> bool {
        true
    }

    fn run(&self, overrides: &SampleOverrides) -> Result<Value> {
        let incomes = draw(self.sample, overrides)?;
        to_json(&MedianResponse {
            median: stats::median(&incomes)?,
            median_png: self.chart.histogram_png(&incomes)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StdDevVarianceResponse {
    pub std_dev_var_png: Png,
    pub std_dev: f64,
    pub variance: f64,
}

pub struct StdDevVarianceEndpoint {
    sample: NormalSpec,
    chart: ChartSettings,
}

impl StdDevVarianceEndpoint {
    pub fn new(sample: NormalSpec, chart: ChartSettings) -> Self {
        Self { sample, chart }
    }
}

impl StatEndpoint for StdDevVarianceEndpoint {
    fn name(&self) -> &'static str {
        "std-deviation-variance"
    }

    fn accepts_overrides(&self) -> bool {
        true
    }

    fn run(&self, overrides: &SampleOverrides) -> Result<Value> {
        let values = draw(self.sample, overrides)?;
        to_json(&StdDevVarianceResponse {
            std_dev: blame_overrides(overrides, stats::std_dev(&values))?,
            variance: blame_overrides(overrides, stats::variance(&values))?,
            std_dev_var_png: self.chart.histogram_png(&values)?,
        })
    }
}
