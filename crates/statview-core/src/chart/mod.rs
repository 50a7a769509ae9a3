//! Chart model: layers over one cartesian plane, rasterized to PNG.
//!
//! The model itself is plain data; `render` owns the plotters/png side.
//! Charts carry no text, so rasterization never needs system fonts.

mod render;

pub use render::{FIT_COLOR, PLOT_COLOR};

use bytes::Bytes;

use crate::error::{Result, StatError};
use crate::stats::Regression;

/// Default canvas size in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Default histogram resolution.
pub const DEFAULT_BINS: usize = 50;

/// Visual form of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Histogram,
    Line,
    Scatter,
    LinePoints,
}

/// Equal-width histogram of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn compute(data: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(StatError::InvalidParameter("histogram needs at least one bin".into()));
        }
        if data.is_empty() {
            return Err(StatError::InsufficientData { needed: 1, got: 0 });
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(StatError::Render("histogram input contains non-finite values".into()));
        }

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let step = (max - min) / bins as f64;
        if step == 0.0 {
            let d = unit_pad(min);
            return Ok(Self { edges: vec![min - d, max + d], counts: vec![data.len()] });
        }

        let edges = (0..=bins).map(|i| min + i as f64 * step).collect();
        let mut counts = vec![0; bins];
        for &v in data {
            let idx = (((v - min) / step).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Ok(Self { edges, counts })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// One drawable series.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Histogram(Histogram),
    Line(Vec<(f64, f64)>),
    Scatter(Vec<(f64, f64)>),
    LinePoints(Vec<(f64, f64)>),
    /// Fitted regression line spanning the chart's x range.
    Fit(Regression),
}

impl Layer {
    pub fn kind(&self) -> ChartKind {
        match self {
            Layer::Histogram(_) => ChartKind::Histogram,
            Layer::Line(_) | Layer::Fit(_) => ChartKind::Line,
            Layer::Scatter(_) => ChartKind::Scatter,
            Layer::LinePoints(_) => ChartKind::LinePoints,
        }
    }

    /// Convenience: zip two equal-length columns into scatter points.
    pub fn scatter(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(StatError::LengthMismatch { left: x.len(), right: y.len() });
        }
        Ok(Layer::Scatter(x.iter().copied().zip(y.iter().copied()).collect()))
    }
}

/// Data-space extent of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// A chart ready to rasterize.
#[derive(Debug, Clone)]
pub struct Chart {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
    x_range: Option<(f64, f64)>,
}

impl Chart {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, layers: Vec::new(), x_range: None }
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Pin the x axis instead of deriving it from the data.
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Extent covering every layer, padded so nothing sits on the frame.
    pub fn bounds(&self) -> Result<Bounds> {
        let mut xs = (f64::INFINITY, f64::NEG_INFINITY);
        let mut ys = (f64::INFINITY, f64::NEG_INFINITY);
        let mut grow = |x: f64, y: f64| {
            xs = (xs.0.min(x), xs.1.max(x));
            ys = (ys.0.min(y), ys.1.max(y));
        };

        for layer in &self.layers {
            match layer {
                Layer::Histogram(h) => {
                    let peak = h.counts.iter().copied().max().unwrap_or(0) as f64;
                    if let (Some(&lo), Some(&hi)) = (h.edges.first(), h.edges.last()) {
                        grow(lo, 0.0);
                        grow(hi, peak);
                    }
                }
                Layer::Line(pts) | Layer::Scatter(pts) | Layer::LinePoints(pts) => {
                    if pts.is_empty() {
                        return Err(StatError::Render("empty point set".into()));
                    }
                    if pts.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
                        return Err(StatError::Render("point set contains non-finite values".into()));
                    }
                    for &(x, y) in pts {
                        grow(x, y);
                    }
                }
                Layer::Fit(_) => {}
            }
        }

        if let Some((lo, hi)) = self.x_range {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(StatError::Render(format!("invalid x range {lo}..{hi}")));
            }
            xs = (lo, hi);
        }

        if !xs.0.is_finite() || !ys.0.is_finite() {
            return Err(StatError::Render("chart has no data".into()));
        }

        // The fitted line is evaluated over the final x range.
        for layer in &self.layers {
            if let Layer::Fit(fit) = layer {
                for y in [fit.predict(xs.0), fit.predict(xs.1)] {
                    ys = (ys.0.min(y), ys.1.max(y));
                }
            }
        }

        Ok(Bounds { x: pad(xs, self.x_range.is_none()), y: pad(ys, true) })
    }

    /// Rasterize and encode as PNG.
    pub fn render_png(&self) -> Result<Bytes> {
        render::render_png(self)
    }
}

fn pad((lo, hi): (f64, f64), margin: bool) -> (f64, f64) {
    let span = hi - lo;
    if span == 0.0 {
        let d = unit_pad(lo);
        return (lo - d, hi + d);
    }
    if margin {
        (lo - span * 0.02, hi + span * 0.05)
    } else {
        (lo, hi)
    }
}

/// Half-width given to a zero-width range around `v`.
fn unit_pad(v: f64) -> f64 {
    if v.abs() > 1.0 {
        v.abs() * 0.05
    } else {
        0.5
    }
}
