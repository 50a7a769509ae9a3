//! Theoretical distribution curves: normal PDF, binomial and Poisson PMFs.

use std::ops::Range;

use serde::Serialize;
use serde_json::Value;

use statview_core::chart::Layer;
use statview_core::distribution;
use statview_core::error::Result;

use super::{to_json, ChartSettings, Png};
use crate::dispatch::{SampleOverrides, StatEndpoint};

const PDF_STEP: f64 = 0.001;
const BINOMIAL_TRIALS: u64 = 10;
const BINOMIAL_P: f64 = 0.5;
const POISSON_LAMBDA: f64 = 500.0;
/// Counts plotted for the Poisson curve; the upper end is excluded.
pub const POISSON_KS: Range<u64> = 400..600;

#[derive(Debug, Serialize)]
pub struct PdfResponse {
    pub pdf_png: Png,
}

pub struct PdfEndpoint {
    chart: ChartSettings,
}

impl PdfEndpoint {
    pub fn new(chart: ChartSettings) -> Self {
        Self { chart }
    }
}

impl StatEndpoint for PdfEndpoint {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn run(&self, _: &SampleOverrides) -> Result<Value> {
        let curve = distribution::normal_pdf(0.0, 1.0, -3.0, 3.0, PDF_STEP)?;
        let png = self.chart.canvas().with_layer(Layer::Line(curve)).render_png()?;
        to_json(&PdfResponse { pdf_png: Png(png) })
    }
}

#[derive(Debug, Serialize)]
pub struct BinomialResponse {
    pub pmf_png: Png,
}

pub struct BinomialEndpoint {
    chart: ChartSettings,
}

impl BinomialEndpoint {
    pub fn new(chart: ChartSettings) -> Self {
        Self { chart }
    }
}

impl StatEndpoint for BinomialEndpoint {
    fn name(&self) -> &'static str {
        "binomial"
    }

    fn run(&self, _: &SampleOverrides) -> Result<Value> {
        let pmf = distribution::binomial_pmf(BINOMIAL_TRIALS, BINOMIAL_P)?;
        let png = self
            .chart
            .canvas()
            .with_layer(Layer::LinePoints(pmf))
            .with_x_range(0.0, BINOMIAL_TRIALS as f64)
            .render_png()?;
        to_json(&BinomialResponse { pmf_png: Png(png) })
    }
}

#[derive(Debug, Serialize)]
pub struct PoissonResponse {
    pub poisson_png: Png,
}

pub struct PoissonEndpoint {
    chart: ChartSettings,
}

impl PoissonEndpoint {
    pub fn new(chart: ChartSettings) -> Self {
        Self { chart }
    }
}

impl StatEndpoint for PoissonEndpoint {
    fn name(&self) -> &'static str {
        "poisson"
    }

    fn run(&self, _: &SampleOverrides) -> Result<Value> {
        let pmf = distribution::poisson_pmf(POISSON_LAMBDA, POISSON_KS)?;
        let png = self.chart.canvas().with_layer(Layer::Line(pmf)).render_png()?;
        to_json(&PoissonResponse { poisson_png: Png(png) })
    }
}
