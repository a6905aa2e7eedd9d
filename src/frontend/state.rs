//! Action and dialog types for the frontend
//!
//! UI panels never touch the session directly. They return [`AppAction`]s
//! which the app applies in order, and every blocking dialog goes through the
//! [`Dialogs`] seam so the action handling can run without a display.

use crate::analysis::AnalysisMode;
use crate::config::SPREADSHEET_EXTENSIONS;
use crate::error::ShmError;
use std::path::PathBuf;

/// Suggested file name for an exported report
pub const DEFAULT_REPORT_NAME: &str = "shm_report.pdf";

/// Actions that panels can emit
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Ask for a spreadsheet and load it
    OpenSpreadsheet,
    /// Load a known spreadsheet
    LoadSpreadsheet(PathBuf),
    /// Change the selected analysis mode
    SelectMode(AnalysisMode),
    /// Analyze and chart the selected mode
    ShowChart,
    /// Ask for an output path and export the current chart
    ExportReport,
    /// Export the current chart to a known path
    ExportReportTo(PathBuf),
}

/// Severity of a message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message box to show the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Notice for a failed action; missing data or chart is only a warning
    pub fn from_error(title: impl Into<String>, error: &ShmError) -> Self {
        let level = if error.is_warning() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Error
        };
        Self {
            level,
            title: title.into(),
            message: error.to_string(),
        }
    }
}

/// Blocking dialogs used by the app
#[cfg_attr(test, mockall::automock)]
pub trait Dialogs {
    /// Pick a spreadsheet to open; `None` when cancelled
    fn pick_spreadsheet(&self) -> Option<PathBuf>;

    /// Pick where to save the report; `None` when cancelled
    fn pick_report_path(&self, suggested_name: &str) -> Option<PathBuf>;

    /// Show a message box
    fn notify(&self, notice: &Notice);
}

/// Native dialogs via rfd
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_spreadsheet(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open Motion Data")
            .add_filter("Spreadsheet", SPREADSHEET_EXTENSIONS)
            .pick_file()
    }

    fn pick_report_path(&self, suggested_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Export Report")
            .set_file_name(suggested_name)
            .add_filter("PDF", &["pdf"])
            .save_file()
    }

    fn notify(&self, notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Info => rfd::MessageLevel::Info,
            NoticeLevel::Warning => rfd::MessageLevel::Warning,
            NoticeLevel::Error => rfd::MessageLevel::Error,
        };
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    #[test]
    fn test_notice_levels() {
        let warn = Notice::from_error("Show Chart", &ShmError::NoData);
        assert_eq!(warn.level, NoticeLevel::Warning);

        let wrapped = ShmError::NoChart.with_context("Export");
        assert_eq!(Notice::from_error("Export", &wrapped).level, NoticeLevel::Warning);

        let err = Notice::from_error("Load", &ShmError::Load(LoadError::NoValidRows));
        assert_eq!(err.level, NoticeLevel::Error);
        assert!(err.message.contains("no rows"));
    }
}
