//! Error handling for the SHM analyzer
//!
//! This module defines the loader error, the crate-wide error type and a
//! Result alias for use throughout the application.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a sample set from a spreadsheet
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The workbook could not be opened or parsed
    #[error("could not read {path:?}: {message}")]
    Unreadable { path: PathBuf, message: String },

    /// The workbook contains no worksheet to read
    #[error("{0:?} contains no worksheets")]
    NoWorksheet(PathBuf),

    /// No row had all five required columns populated
    #[error("no rows with time, position, velocity, kinetic and potential energy values")]
    NoValidRows,

    /// A required cell holds something that is not a number
    #[error("row {row}, column {column}: {value:?} is not a number")]
    NonNumeric {
        /// 1-based data row (header excluded)
        row: usize,
        /// Column name
        column: &'static str,
        value: String,
    },
}

/// Main error type for SHM analyzer operations
#[derive(Error, Debug)]
pub enum ShmError {
    /// Loading the spreadsheet failed; the previous sample set is kept
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// An action needing data ran before any file was loaded
    #[error("No data loaded: load a spreadsheet first")]
    NoData,

    /// Export ran before any chart was shown
    #[error("No chart to export: show a chart first")]
    NoChart,

    /// Chart rasterization failed
    #[error("Chart rendering error: {0}")]
    Render(String),

    /// PDF assembly failed
    #[error("Report error: {0}")]
    Report(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ShmError>,
    },
}

impl ShmError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ShmError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping any context wrappers
    pub fn root(&self) -> &ShmError {
        match self {
            ShmError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether this error should be shown as a warning rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self.root(), ShmError::NoData | ShmError::NoChart)
    }
}

/// Result type alias for SHM analyzer operations
pub type Result<T> = std::result::Result<T, ShmError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
