//! Frontend module for egui UI
//!
//! This module provides the analyzer window using eframe/egui. All state
//! lives in a [`Session`]; the panels only read it and return
//! [`AppAction`]s, which [`ShmApp::handle_action`] applies once the frame's
//! panels are drawn.
//!
//! # Layout
//!
//! - Toolbar: load button, mode selector, "Show chart" and "Export PDF"
//! - Right panel: the "Analysis:" explanation of the current chart
//! - Central area: the chart drawn with egui_plot
//! - Status bar: loaded file, sample count and current verdict
//!
//! # Main Types
//!
//! - [`ShmApp`] - Main application state implementing [`eframe::App`]
//! - [`PlotView`] - Plot configuration and rendering
//! - [`Dialogs`] - File pickers and message boxes, native via rfd

mod plot;
pub mod state;
pub mod status_bar;
pub mod toolbar;

pub use plot::PlotView;
pub use state::{AppAction, Dialogs, NativeDialogs, Notice, NoticeLevel, DEFAULT_REPORT_NAME};

use crate::analysis::AnalysisMode;
use crate::config::AppConfig;
use crate::error::ShmError;
use crate::session::Session;
use status_bar::{render_status_bar, StatusBarContext};
use toolbar::{render_toolbar, ToolbarContext};

/// Main application state for the analyzer
pub struct ShmApp {
    session: Session,
    mode: AnalysisMode,
    plot_view: PlotView,
    dialogs: Box<dyn Dialogs>,
}

impl ShmApp {
    /// Create the app for an eframe window
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_dialogs(Session::new(config), Box::new(NativeDialogs))
    }

    /// Create the app around an existing session and dialog provider
    pub fn with_dialogs(session: Session, dialogs: Box<dyn Dialogs>) -> Self {
        Self {
            session,
            mode: AnalysisMode::default(),
            plot_view: PlotView::new(),
            dialogs,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Currently selected analysis mode
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Apply one action. Failures are reported through the dialogs and
    /// leave the app idle.
    pub fn handle_action(&mut self, action: AppAction) {
        tracing::debug!("Handling {:?}", action);
        match action {
            AppAction::OpenSpreadsheet => match self.dialogs.pick_spreadsheet() {
                Some(path) => self.handle_action(AppAction::LoadSpreadsheet(path)),
                None => tracing::debug!("Open dialog cancelled"),
            },
            AppAction::LoadSpreadsheet(path) => match self.session.load_file(&path) {
                Ok(samples) => {
                    let count = samples.len();
                    self.plot_view.reset_view();
                    self.dialogs.notify(&Notice::info(
                        "Data Loaded",
                        format!("Loaded {} samples from {}", count, path.display()),
                    ));
                }
                Err(e) => self.report_error("Load Error", &e),
            },
            AppAction::SelectMode(mode) => {
                self.mode = mode;
            }
            AppAction::ShowChart => match self.session.show_chart(self.mode) {
                Ok(_) => self.plot_view.reset_view(),
                Err(e) => self.report_error("Show Chart", &e),
            },
            AppAction::ExportReport => {
                if self.session.chart().is_none() {
                    self.report_error("Export PDF", &ShmError::NoChart);
                    return;
                }
                match self.dialogs.pick_report_path(DEFAULT_REPORT_NAME) {
                    Some(path) => self.handle_action(AppAction::ExportReportTo(path)),
                    None => tracing::debug!("Export dialog cancelled"),
                }
            }
            AppAction::ExportReportTo(path) => match self.session.export_pdf(&path) {
                Ok(()) => self.dialogs.notify(&Notice::info(
                    "Export PDF",
                    format!("Report saved to {}", path.display()),
                )),
                Err(e) => self.report_error("Export PDF", &e),
            },
        }
    }

    fn report_error(&self, title: &str, error: &ShmError) {
        let notice = Notice::from_error(title, error);
        match notice.level {
            NoticeLevel::Error => tracing::error!("{}: {}", title, error),
            _ => tracing::warn!("{}: {}", title, error),
        }
        self.dialogs.notify(&notice);
    }

    fn render_analysis_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Analysis:");
        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| match self.session.chart() {
            Some(chart) => {
                for line in chart.verdict.lines() {
                    ui.label(line);
                }
            }
            None => {
                ui.weak("Show a chart to see its analysis.");
            }
        });
    }
}

impl eframe::App for ShmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            actions.extend(render_toolbar(
                ui,
                &ToolbarContext {
                    mode: self.mode,
                    has_data: self.session.has_data(),
                    has_chart: self.session.chart().is_some(),
                },
            ));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(
                ui,
                &StatusBarContext {
                    source: self.session.source(),
                    samples: self.session.samples(),
                    chart: self.session.chart(),
                },
            );
        });

        egui::SidePanel::right("analysis_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.render_analysis_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| match self.session.chart() {
            Some(chart) => self.plot_view.render(ui, &chart.spec),
            None => self.plot_view.render_empty(ui),
        });

        for action in actions {
            self.handle_action(action);
        }
    }
}
