//! Two-variable relationships: covariance / correlation and regression.

use serde::Serialize;
use serde_json::Value;

use statview_core::chart::Layer;
use statview_core::error::Result;
use statview_core::sample::{NormalSpec, Sampler, Seed};
use statview_core::stats;

use super::{to_json, ChartSettings, Png};
use crate::dispatch::{SampleOverrides, StatEndpoint};

#[derive(Debug, Serialize)]
pub struct CovCorResponse {
    pub covariance1_png: Png,
    pub covariance1: f64,
    pub covariance2_png: Png,
    pub covariance2: f64,
    pub correlation: f64,
}

/// Page speed against two purchase amounts: one independent of speed,
/// one inversely proportional to it.
pub struct CovCorEndpoint {
    samples: usize,
    chart: ChartSettings,
}

impl CovCorEndpoint {
    pub fn new(samples: usize, chart: ChartSettings) -> Self {
        Self { samples, chart }
    }
}

impl StatEndpoint for CovCorEndpoint {
    fn name(&self) -> &'static str {
        "covcor"
    }

    fn run(&self, _: &SampleOverrides) -> Result<Value> {
        let mut rng = Sampler::new(Seed::Entropy);
        let page_speeds = rng.normal(NormalSpec::new(self.samples, 3.0, 1.0))?;
        let independent = rng.normal(NormalSpec::new(self.samples, 50.0, 10.0))?;
        let dependent: Vec<f64> = rng
            .normal(NormalSpec::new(self.samples, 50.0, 10.0))?
            .into_iter()
            .zip(&page_speeds)
            .map(|(purchase, speed)| purchase / speed)
            .collect();

        let scatter = |ys: &[f64]| -> Result<Png> {
            self.chart
                .canvas()
                .with_layer(Layer::scatter(&page_speeds, ys)?)
                .render_png()
                .map(Png)
        };

        to_json(&CovCorResponse {
            covariance1_png: scatter(&independent)?,
            covariance1: stats::covariance(&page_speeds, &independent)?,
            covariance2_png: scatter(&dependent)?,
            covariance2: stats::covariance(&page_speeds, &dependent)?,
            correlation: stats::correlation(&page_speeds, &dependent)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct LinearRegressionResponse {
    #[serde(rename = "linearRegression")]
    pub linear_regression: Png,
    #[serde(rename = "linearRegressionR")]
    pub r_squared: f64,
}

/// Purchase amount falling linearly with page speed, fitted by least
/// squares. Seeded, so every call returns the same chart.
pub struct LinearRegressionEndpoint {
    samples: usize,
    seed: u64,
    chart: ChartSettings,
}

impl LinearRegressionEndpoint {
    pub fn new(samples: usize, seed: u64, chart: ChartSettings) -> Self {
        Self { samples, seed, chart }
    }
}

impl StatEndpoint for LinearRegressionEndpoint {
    fn name(&self) -> &'static str {
        "linear-regression"
    }

    fn run(&self, _: &SampleOverrides) -> Result<Value> {
        let mut rng = Sampler::new(Seed::Fixed(self.seed));
        let page_speeds = rng.normal(NormalSpec::new(self.samples, 3.0, 1.0))?;
        let noise = rng.normal(NormalSpec::new(self.samples, 0.0, 0.1))?;
        let purchases: Vec<f64> = page_speeds
            .iter()
            .zip(&noise)
            .map(|(speed, jitter)| 100.0 - (speed + jitter) * 3.0)
            .collect();

        let fit = stats::linear_regression(&page_speeds, &purchases)?;
        tracing::debug!(slope = fit.slope, intercept = fit.intercept, r_squared = fit.r_squared, "regression fitted");

        let png = self
            .chart
            .canvas()
            .with_layer(Layer::scatter(&page_speeds, &purchases)?)
            .with_layer(Layer::Fit(fit))
            .render_png()?;

        to_json(&LinearRegressionResponse { linear_regression: Png(png), r_squared: fit.r_squared })
    }
}
