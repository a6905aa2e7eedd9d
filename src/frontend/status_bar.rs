//! Status bar panel: bottom bar showing the loaded file and sample count.

use egui::{Color32, RichText, Ui};
use std::path::Path;

use crate::frontend::plot::point_count;
use crate::session::RenderedChart;
use crate::types::SampleSet;

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub source: Option<&'a Path>,
    pub samples: Option<&'a SampleSet>,
    pub chart: Option<&'a RenderedChart>,
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Loaded file ===
        match ctx.samples {
            Some(samples) => {
                ui.colored_label(Color32::GREEN, "●");
                ui.label(RichText::new(file_label(ctx.source)).small());
                ui.separator();
                ui.label(RichText::new(format!("Samples: {}", samples.len())).small());
                ui.separator();
                ui.label(RichText::new(format!("Duration: {:.2} s", samples.duration())).small());
            }
            None => {
                ui.colored_label(Color32::GRAY, "●");
                ui.label(RichText::new("No data loaded").small());
            }
        }

        // === Current chart (right-aligned) ===
        if let Some(chart) = ctx.chart {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (color, text) = if chart.verdict.is_shm {
                    (Color32::from_rgb(100, 200, 100), "SHM-like")
                } else {
                    (Color32::LIGHT_RED, "Not SHM-like")
                };
                ui.colored_label(color, RichText::new(text).small());
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} ({} points)",
                        chart.mode().display_name(),
                        point_count(&chart.spec)
                    ))
                    .small(),
                );
            });
        }
    });
}

fn file_label(source: Option<&Path>) -> String {
    source
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(in memory)".to_string())
}
