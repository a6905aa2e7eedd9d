//! Backend module for file input
//!
//! Turns a spreadsheet on disk into a [`crate::types::SampleSet`]. The rest
//! of the crate never touches the workbook format directly.

pub mod spreadsheet;

pub use spreadsheet::{load_sample_set, read_rows};
