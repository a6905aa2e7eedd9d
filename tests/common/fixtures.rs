//! Spreadsheet fixtures written with rust_xlsxwriter

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Header row used by the lab software exports
pub const HEADER: [&str; 5] = ["t (s)", "x (m)", "v (m/s)", "Ec (J)", "Ep (J)"];

/// One fixture cell
#[derive(Debug, Clone, Copy)]
pub enum FixtureCell {
    Num(f64),
    Text(&'static str),
    Blank,
}

impl From<f64> for FixtureCell {
    fn from(value: f64) -> Self {
        FixtureCell::Num(value)
    }
}

/// Write a single-sheet workbook with `header` on row 0 and `rows` below it.
pub fn write_workbook(
    dir: &Path,
    name: &str,
    header: &[&str],
    rows: &[Vec<FixtureCell>],
) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in header.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *title)
            .expect("write header");
    }
    for (row, cells) in rows.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match *cell {
                FixtureCell::Num(value) => {
                    sheet.write_number(row, col, value).expect("write number");
                }
                FixtureCell::Text(text) => {
                    sheet.write_string(row, col, text).expect("write text");
                }
                FixtureCell::Blank => {}
            }
        }
    }

    workbook.save(&path).expect("save workbook");
    path
}

/// Numeric rows as fixture rows
pub fn numeric_rows(rows: &[[f64; 5]]) -> Vec<Vec<FixtureCell>> {
    rows.iter()
        .map(|r| r.iter().map(|&v| FixtureCell::Num(v)).collect())
        .collect()
}
