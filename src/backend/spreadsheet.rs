//! Spreadsheet reader
//!
//! Reads the first visible worksheet of any workbook calamine understands
//! and hands the data rows (header removed) to [`SampleSet::from_rows`].

use crate::error::LoadError;
use crate::types::{Cell, SampleSet};
use calamine::{open_workbook_auto, Data, Reader, Sheet, SheetType, SheetVisible};
use std::path::Path;

/// Read the data rows of the first visible worksheet, skipping the header row.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<Cell>>, LoadError> {
    let unreadable = |message: String| LoadError::Unreadable {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| unreadable(e.to_string()))?;
    let sheet = data_sheet(workbook.sheets_metadata())
        .ok_or_else(|| LoadError::NoWorksheet(path.to_path_buf()))?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| unreadable(e.to_string()))?;

    // The range begins at the first used cell; sheet row 0 is the header.
    let header_rows = match range.start() {
        Some((0, _)) => 1,
        _ => 0,
    };

    // Columns before the range start are empty on every row.
    let leading_blank = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let rows = range
        .rows()
        .skip(header_rows)
        .map(|row| {
            std::iter::repeat(Cell::Empty)
                .take(leading_blank)
                .chain(row.iter().map(cell_from_data))
                .collect()
        })
        .collect::<Vec<Vec<Cell>>>();

    tracing::debug!("Read {} data rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Load a sample set from a spreadsheet file.
pub fn load_sample_set(path: &Path) -> Result<SampleSet, LoadError> {
    let rows = read_rows(path)?;
    SampleSet::from_rows(rows)
}

/// Name of the sheet to read: the first visible worksheet, else the first sheet.
///
/// calamine does not expose the workbook's active tab.
fn data_sheet(sheets: &[Sheet]) -> Option<String> {
    sheets
        .iter()
        .find(|s| s.typ == SheetType::WorkSheet && s.visible == SheetVisible::Visible)
        .or_else(|| sheets.first())
        .map(|s| s.name.clone())
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::Error(e) => Cell::Text(format!("{e}")),
    }
}
