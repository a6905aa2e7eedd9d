//! Toolbar panel: load, mode selection, chart and export buttons.

use egui::Ui;

use crate::analysis::AnalysisMode;
use crate::frontend::state::AppAction;

/// Context needed to render the toolbar.
pub struct ToolbarContext {
    pub mode: AnalysisMode,
    pub has_data: bool,
    pub has_chart: bool,
}

/// Render the main application toolbar.
///
/// Buttons stay enabled without data or a chart so the user gets the
/// matching warning instead of a dead button.
pub fn render_toolbar(ui: &mut Ui, ctx: &ToolbarContext) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        if ui
            .button("📂 Load spreadsheet")
            .on_hover_text("Open a spreadsheet with t, x, v, Ec, Ep columns")
            .clicked()
        {
            actions.push(AppAction::OpenSpreadsheet);
        }

        ui.separator();

        ui.label("Mode:");
        let mut mode = ctx.mode;
        egui::ComboBox::from_id_salt("analysis_mode_selector")
            .selected_text(mode.display_name())
            .width(240.0)
            .show_ui(ui, |ui| {
                for &candidate in AnalysisMode::all() {
                    ui.selectable_value(&mut mode, candidate, candidate.display_name());
                }
            });
        if mode != ctx.mode {
            actions.push(AppAction::SelectMode(mode));
        }

        let chart_button = ui.button("📈 Show chart");
        let chart_button = if ctx.has_data {
            chart_button
        } else {
            chart_button.on_hover_text("Load a spreadsheet first")
        };
        if chart_button.clicked() {
            actions.push(AppAction::ShowChart);
        }

        let export_button = ui.button("💾 Export PDF");
        let export_button = if ctx.has_chart {
            export_button
        } else {
            export_button.on_hover_text("Show a chart first")
        };
        if export_button.clicked() {
            actions.push(AppAction::ExportReport);
        }
    });

    actions
}
