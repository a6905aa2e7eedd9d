//! Chart description shared by the on-screen plot and the exported image
//!
//! A [`ChartSpec`] is plain data: title, axis labels and the series to draw.
//! The egui front end and [`PngChartRenderer`] both draw from it, so the
//! exported chart always matches what is on screen.

use super::ChartRenderer;
use crate::analysis::{AnalysisMode, Verdict};
use crate::config::ChartConfig;
use crate::error::{Result, ShmError};
use crate::types::SampleSet;
use plotters::prelude::*;
use std::path::Path;

/// RGB series colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor(pub u8, pub u8, pub u8);

impl SeriesColor {
    pub const BLUE: SeriesColor = SeriesColor(31, 119, 180);
    pub const ORANGE: SeriesColor = SeriesColor(255, 127, 14);
    pub const GREEN: SeriesColor = SeriesColor(44, 160, 44);
    pub const RED: SeriesColor = SeriesColor(214, 39, 40);
    pub const BLACK: SeriesColor = SeriesColor(0, 0, 0);
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Scatter,
}

/// One named series of `[t, value]` points
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: SeriesColor,
    pub style: SeriesStyle,
    pub points: Vec<[f64; 2]>,
}

impl ChartSeries {
    fn from_columns(
        label: impl Into<String>,
        color: SeriesColor,
        style: SeriesStyle,
        t: &[f64],
        values: &[f64],
    ) -> Self {
        Self {
            label: label.into(),
            color,
            style,
            points: t.iter().zip(values).map(|(&t, &y)| [t, y]).collect(),
        }
    }
}

/// Everything needed to draw the chart for one mode
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub mode: AnalysisMode,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Series and labels for the verdict's mode
    pub fn build(samples: &SampleSet, verdict: &Verdict) -> Self {
        let t = samples.t();
        let line = SeriesStyle::Line;

        let (y_label, series) = match verdict.mode {
            AnalysisMode::Position => (
                "Position (m)",
                vec![ChartSeries::from_columns("x(t)", SeriesColor::BLUE, line, t, samples.x())],
            ),
            AnalysisMode::Velocity => (
                "Velocity (m/s)",
                vec![ChartSeries::from_columns("v(t)", SeriesColor::ORANGE, line, t, samples.v())],
            ),
            AnalysisMode::Energy => (
                "Energy (J)",
                vec![
                    ChartSeries::from_columns("Ec", SeriesColor::GREEN, line, t, samples.ec()),
                    ChartSeries::from_columns("Ep", SeriesColor::BLUE, line, t, samples.ep()),
                    ChartSeries::from_columns("Etot", SeriesColor::RED, line, t, samples.etot()),
                ],
            ),
            AnalysisMode::EnergyRegression => {
                let mut series = vec![ChartSeries::from_columns(
                    "Etot",
                    SeriesColor::RED,
                    SeriesStyle::Scatter,
                    t,
                    samples.etot(),
                )];
                if let Some(fit) = verdict.fit() {
                    let fitted: Vec<f64> = t.iter().map(|&t| fit.predict(t)).collect();
                    series.push(ChartSeries::from_columns(
                        format!("y = {:.2e}x + {:.2}", fit.slope, fit.intercept),
                        SeriesColor::BLACK,
                        line,
                        t,
                        &fitted,
                    ));
                }
                ("Total Energy (J)", series)
            }
        };

        Self {
            mode: verdict.mode,
            title: verdict.mode.display_name().to_string(),
            x_label: "Time (s)".to_string(),
            y_label: y_label.to_string(),
            series,
        }
    }

    /// Axis ranges `(x_min..x_max, y_min..y_max)` covering every point.
    ///
    /// Degenerate ranges are widened so the plot area never collapses; the
    /// y range gets a 5% margin.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for p in self.series.iter().flat_map(|s| s.points.iter()) {
            if p[0].is_finite() && p[1].is_finite() {
                x = (x.0.min(p[0]), x.1.max(p[0]));
                y = (y.0.min(p[1]), y.1.max(p[1]));
            }
        }

        let widen = |(lo, hi): (f64, f64), margin: f64| {
            if lo > hi {
                (0.0, 1.0)
            } else if lo == hi {
                let pad = (lo.abs() * 0.1).max(0.5);
                (lo - pad, hi + pad)
            } else {
                let pad = (hi - lo) * margin;
                (lo - pad, hi + pad)
            }
        };

        (widen(x, 0.0), widen(y, 0.05))
    }
}

/// Draws a [`ChartSpec`] to a PNG file with plotters
#[derive(Debug, Clone, Default)]
pub struct PngChartRenderer {
    config: ChartConfig,
}

impl PngChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<()> {
        draw_png(chart, path, &self.config).map_err(|e| ShmError::Render(e.to_string()))?;
        tracing::debug!("Rendered {:?} chart to {:?}", chart.mode, path);
        Ok(())
    }
}

fn draw_png(
    chart: &ChartSpec,
    path: &Path,
    config: &ChartConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (config.width_px, config.height_px)).into_drawing_area();
    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = chart.bounds();
    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title.as_str(), ("sans-serif", config.caption_size))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    for series in &chart.series {
        let SeriesColor(r, g, b) = series.color;
        let color = RGBColor(r, g, b);
        let points = series.points.iter().map(|p| (p[0], p[1]));
        match series.style {
            SeriesStyle::Line => {
                ctx.draw_series(LineSeries::new(points, color.stroke_width(2)))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }
            SeriesStyle::Scatter => {
                ctx.draw_series(points.map(|p| Circle::new(p, 3, color.filled())))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));
            }
        }
    }

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
