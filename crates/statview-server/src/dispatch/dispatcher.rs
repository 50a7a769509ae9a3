use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use serde_json::Value;

use statview_core::error::StatError;
use statview_core::sample::{NormalSpec, MAX_MAGNITUDE};

use crate::error::{AppError, Result};

/// A statistics computation served at `/statistics/{name}`.
///
/// `run` is synchronous and CPU-bound; the dispatcher moves it onto the
/// blocking pool.
pub trait StatEndpoint: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether `n` / `mean` / `std_dev` query overrides are honoured.
    fn accepts_overrides(&self) -> bool {
        false
    }

    fn run(&self, overrides: &SampleOverrides) -> statview_core::Result<Value>;
}

/// Caller-supplied changes to an endpoint's default normal sample.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SampleOverrides {
    pub n: Option<usize>,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

impl SampleOverrides {
    pub fn from_query(query: &HashMap<String, String>) -> statview_core::Result<Self> {
        let mut out = Self::default();
        for (key, raw) in query {
            match key.as_str() {
                "n" => {
                    let n: usize = raw
                        .parse()
                        .map_err(|_| StatError::InvalidParameter(format!("n: not an integer: {raw}")))?;
                    if n < 2 {
                        return Err(StatError::InvalidParameter("n must be at least 2".into()));
                    }
                    out.n = Some(n);
                }
                "mean" => out.mean = Some(parse_bounded(key, raw)?),
                "std_dev" => out.std_dev = Some(parse_bounded(key, raw)?),
                other => {
                    return Err(StatError::InvalidParameter(format!(
                        "unknown query parameter: {other}"
                    )))
                }
            }
        }
        Ok(out)
    }

    pub fn is_empty(&self) -> bool {
        self.n.is_none() && self.mean.is_none() && self.std_dev.is_none()
    }

    /// Overlay onto `base`. The result is validated when sampled.
    pub fn apply(&self, base: NormalSpec) -> NormalSpec {
        NormalSpec {
            n: self.n.unwrap_or(base.n),
            mean: self.mean.unwrap_or(base.mean),
            std_dev: self.std_dev.unwrap_or(base.std_dev),
        }
    }
}

fn parse_bounded(key: &str, raw: &str) -> statview_core::Result<f64> {
    let v: f64 = raw
        .parse()
        .map_err(|_| StatError::InvalidParameter(format!("{key}: not a number: {raw}")))?;
    if !v.is_finite() || v.abs() > MAX_MAGNITUDE {
        return Err(StatError::InvalidParameter(format!(
            "{key} must be finite with magnitude <= {MAX_MAGNITUDE:e}"
        )));
    }
    Ok(v)
}

/// Registry of statistics endpoints keyed by route name.
#[derive(Default)]
pub struct Dispatcher {
    endpoints: DashMap<&'static str, Arc<dyn StatEndpoint>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self { endpoints: DashMap::new() }
    }

    pub fn register(&self, endpoint: Arc<dyn StatEndpoint>) {
        self.endpoints.insert(endpoint.name(), endpoint);
    }

    pub fn registered(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.endpoints.iter().map(|e| *e.key()).collect();
        names.sort_unstable();
        names
    }

    pub async fn dispatch(&self, name: &str, overrides: SampleOverrides) -> Result<Value> {
        let endpoint = self
            .endpoints
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("unknown statistic: {name}")))?
            .value()
            .clone();

        if !overrides.is_empty() && !endpoint.accepts_overrides() {
            return Err(StatError::InvalidParameter(format!(
                "{name} does not accept sample parameters"
            ))
            .into());
        }

        let started = Instant::now();
        let worker = Arc::clone(&endpoint);
        let out = tokio::task::spawn_blocking(move || worker.run(&overrides))
            .await
            .map_err(|e| AppError::Internal(format!("{name} worker failed: {e}")))??;

        tracing::debug!(
            endpoint = endpoint.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "statistic computed"
        );
        Ok(out)
    }
}
