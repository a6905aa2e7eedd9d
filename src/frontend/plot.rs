//! Plot rendering for the chart view
//!
//! Draws a [`ChartSpec`] with egui_plot: line series as lines, scatter
//! series as points, with a legend and grid.

use crate::report::{ChartSpec, SeriesColor, SeriesStyle};
use egui::{Color32, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points};

/// Chart view settings
#[derive(Debug, Clone)]
pub struct PlotView {
    /// Line width for line series
    pub line_width: f32,
    /// Marker radius for scatter series
    pub marker_radius: f32,
    pub show_grid: bool,
    /// Bumped on every new chart so zoom and pan start fresh
    generation: u64,
}

impl Default for PlotView {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            marker_radius: 2.5,
            show_grid: true,
            generation: 0,
        }
    }
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the view of the previous chart
    pub fn reset_view(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Render a chart
    pub fn render(&self, ui: &mut Ui, chart: &ChartSpec) {
        ui.vertical_centered(|ui| ui.heading(&chart.title));

        Plot::new(("shm_chart", self.generation))
            .legend(
                Legend::default()
                    .position(Corner::RightTop)
                    .background_alpha(0.8),
            )
            .show_axes(true)
            .show_grid(self.show_grid)
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .show(ui, |plot_ui| {
                for series in &chart.series {
                    let points = PlotPoints::from(series.points.clone());
                    let color = color32(series.color);
                    match series.style {
                        SeriesStyle::Line => plot_ui.line(
                            Line::new(series.label.as_str(), points)
                                .color(color)
                                .width(self.line_width),
                        ),
                        SeriesStyle::Scatter => plot_ui.points(
                            Points::new(series.label.as_str(), points)
                                .color(color)
                                .radius(self.marker_radius),
                        ),
                    }
                }
            });
    }

    /// Placeholder shown before any chart exists
    pub fn render_empty(&self, ui: &mut Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Load a spreadsheet and press \"Show chart\"")
                    .color(Color32::GRAY),
            );
        });
    }
}

fn color32(SeriesColor(r, g, b): SeriesColor) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Number of points drawn for a chart, across all series
pub fn point_count(chart: &ChartSpec) -> usize {
    chart.series.iter().map(|s| s.points.len()).sum()
}
