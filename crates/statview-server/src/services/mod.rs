//! Built-in statistics endpoints.
//!
//! Each endpoint owns a response record with exactly the keys it
//! produces; chart fields serialize as base64 PNG.

mod descriptive;
mod distributions;
mod relationships;

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde::{Serialize, Serializer};
use serde_json::Value;

use statview_core::chart::{Chart, Histogram, Layer};
use statview_core::error::{Result, StatError};

use crate::config::{ChartSection, ServiceConfig};
use crate::dispatch::StatEndpoint;

pub use descriptive::{MeanEndpoint, MedianEndpoint, StdDevVarianceEndpoint};
pub use distributions::{BinomialEndpoint, PdfEndpoint, PoissonEndpoint, POISSON_KS};
pub use relationships::{CovCorEndpoint, LinearRegressionEndpoint};

/// PNG bytes, serialized as a standard (padded) base64 string.
#[derive(Debug, Clone)]
pub struct Png(pub Bytes);

impl Serialize for Png {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

/// Canvas settings shared by every endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
    pub bins: usize,
}

impl ChartSettings {
    pub fn canvas(&self) -> Chart {
        Chart::new(self.width, self.height)
    }

    pub fn histogram_png(&self, data: &[f64]) -> Result<Png> {
        let hist = Histogram::compute(data, self.bins)?;
        self.canvas().with_layer(Layer::Histogram(hist)).render_png().map(Png)
    }
}

impl From<&ChartSection> for ChartSettings {
    fn from(c: &ChartSection) -> Self {
        Self { width: c.width, height: c.height, bins: c.histogram_bins }
    }
}

fn to_json<T: Serialize>(resp: &T) -> Result<Value> {
    serde_json::to_value(resp).map_err(|e| StatError::Internal(format!("serialize response: {e}")))
}

/// Every built-in endpoint, configured from `cfg`.
pub fn builtin(cfg: &ServiceConfig) -> Vec<Arc<dyn StatEndpoint>> {
    let chart = ChartSettings::from(&cfg.chart);
    let sampling = &cfg.sampling;
    vec![
        Arc::new(MeanEndpoint::new(sampling.income.spec(), chart)),
        Arc::new(MedianEndpoint::new(sampling.income.spec(), chart)),
        Arc::new(StdDevVarianceEndpoint::new(sampling.spread.spec(), chart)),
        Arc::new(PdfEndpoint::new(chart)),
        Arc::new(BinomialEndpoint::new(chart)),
        Arc::new(PoissonEndpoint::new(chart)),
        Arc::new(CovCorEndpoint::new(sampling.page_speed.samples, chart)),
        Arc::new(LinearRegressionEndpoint::new(
            sampling.regression.samples,
            sampling.regression.seed,
            chart,
        )),
    ]
}
