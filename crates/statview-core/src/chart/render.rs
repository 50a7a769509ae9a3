//! plotters bitmap rasterization + PNG encoding.

use std::fmt::Display;

use bytes::Bytes;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use super::{Bounds, Chart, Layer};
use crate::error::{Result, StatError};

/// Fill / stroke colour shared by every data layer.
pub const PLOT_COLOR: RGBColor = RGBColor(71, 85, 105);
/// Regression line colour.
pub const FIT_COLOR: RGBColor = RGBColor(241, 90, 96);

const MARGIN: u32 = 20;
const MARKER_SIZE: i32 = 3;

type Plane<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn render_err<E: Display>(e: E) -> StatError {
    StatError::Render(e.to_string())
}

pub(super) fn render_png(chart: &Chart) -> Result<Bytes> {
    let (width, height) = chart.size();
    if width == 0 || height == 0 {
        return Err(StatError::Render(format!("invalid canvas {width}x{height}")));
    }
    let bounds = chart.bounds()?;

    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut plane = ChartBuilder::on(&root)
            .margin(MARGIN)
            .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
            .map_err(render_err)?;

        for layer in chart.layers() {
            draw_layer(&mut plane, layer, &bounds)?;
        }
        root.present().map_err(render_err)?;
    }

    let png = encode_png(&rgb, width, height)?;
    tracing::trace!(width, height, layers = chart.layers().len(), bytes = png.len(), "chart encoded");
    Ok(png)
}

fn draw_layer<DB: DrawingBackend>(plane: &mut Plane<'_, DB>, layer: &Layer, bounds: &Bounds) -> Result<()> {
    match layer {
        Layer::Histogram(h) => {
            let bars = h
                .edges
                .windows(2)
                .zip(&h.counts)
                .map(|(edge, &count)| {
                    Rectangle::new([(edge[0], 0.0), (edge[1], count as f64)], PLOT_COLOR.filled())
                });
            plane.draw_series(bars).map_err(render_err)?;
        }
        Layer::Line(pts) => {
            plane
                .draw_series(LineSeries::new(pts.iter().copied(), PLOT_COLOR.stroke_width(2)))
                .map_err(render_err)?;
        }
        Layer::Scatter(pts) => {
            plane
                .draw_series(pts.iter().map(|&p| Circle::new(p, MARKER_SIZE, PLOT_COLOR.filled())))
                .map_err(render_err)?;
        }
        Layer::LinePoints(pts) => {
            plane
                .draw_series(LineSeries::new(pts.iter().copied(), PLOT_COLOR.stroke_width(2)))
                .map_err(render_err)?;
            plane
                .draw_series(pts.iter().map(|&p| Circle::new(p, MARKER_SIZE, PLOT_COLOR.stroke_width(1))))
                .map_err(render_err)?;
        }
        Layer::Fit(fit) => {
            let (x0, x1) = bounds.x;
            let ends = [(x0, fit.predict(x0)), (x1, fit.predict(x1))];
            plane
                .draw_series(LineSeries::new(ends, FIT_COLOR.stroke_width(3)))
                .map_err(render_err)?;
        }
    }
    Ok(())
}

fn encode_png(rgb: &[u8], width: u32, height: u32) -> Result<Bytes> {
    let encode_err = |e: png::EncodingError| StatError::Encode(e.to_string());

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer.write_image_data(rgb).map_err(encode_err)?;
    writer.finish().map_err(encode_err)?;

    Ok(Bytes::from(out))
}
