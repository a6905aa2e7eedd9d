//! Core data types for the SHM analyzer
//!
//! # Main Types
//!
//! - [`Cell`] - One raw spreadsheet cell as handed over by the reader
//! - [`Column`] - The five required input columns, in file order
//! - [`SampleSet`] - One loaded dataset as parallel sequences
//!
//! A [`SampleSet`] is built wholesale from rows and never mutated afterwards.
//! Every sequence has the same length, which is at least one.

use crate::error::LoadError;

/// Raw value of one spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Whether the cell counts as missing
    pub fn is_absent(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Finite numeric value, if the cell holds or spells one
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Empty => None,
        };
        value.filter(|v: &f64| v.is_finite())
    }

    fn describe(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}

/// Required input columns, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Time,
    Position,
    Velocity,
    KineticEnergy,
    PotentialEnergy,
}

impl Column {
    /// All required columns in file order
    pub fn all() -> &'static [Column] {
        &[
            Column::Time,
            Column::Position,
            Column::Velocity,
            Column::KineticEnergy,
            Column::PotentialEnergy,
        ]
    }

    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Column::Time => "time",
            Column::Position => "position",
            Column::Velocity => "velocity",
            Column::KineticEnergy => "kinetic energy",
            Column::PotentialEnergy => "potential energy",
        }
    }
}

/// Number of leading columns every data row must populate
pub const REQUIRED_COLUMNS: usize = 5;

/// One loaded dataset
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    t: Vec<f64>,
    x: Vec<f64>,
    v: Vec<f64>,
    ec: Vec<f64>,
    ep: Vec<f64>,
    etot: Vec<f64>,
}

impl SampleSet {
    /// Build a sample set from spreadsheet rows (header already removed).
    ///
    /// Rows missing any of the first five cells are skipped. Any other cell
    /// that is not numeric fails the whole load.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Cell]>,
    {
        let mut set = SampleSet {
            t: Vec::new(),
            x: Vec::new(),
            v: Vec::new(),
            ec: Vec::new(),
            ep: Vec::new(),
            etot: Vec::new(),
        };

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if row.len() < REQUIRED_COLUMNS || row[..REQUIRED_COLUMNS].iter().any(Cell::is_absent)
            {
                continue;
            }

            let mut values = [0.0; REQUIRED_COLUMNS];
            for (slot, (cell, column)) in values.iter_mut().zip(row.iter().zip(Column::all())) {
                *slot = cell.to_f64().ok_or_else(|| LoadError::NonNumeric {
                    row: index + 1,
                    column: column.name(),
                    value: cell.describe(),
                })?;
            }

            let [t, x, v, ec, ep] = values;
            set.t.push(t);
            set.x.push(x);
            set.v.push(v);
            set.ec.push(ec);
            set.ep.push(ep);
            set.etot.push(ec + ep);
        }

        if set.t.is_empty() {
            return Err(LoadError::NoValidRows);
        }

        Ok(set)
    }

    /// Build a sample set directly from column vectors.
    ///
    /// Columns are truncated to the shortest one; returns `NoValidRows` when
    /// that length is zero.
    pub fn from_columns(
        t: Vec<f64>,
        x: Vec<f64>,
        v: Vec<f64>,
        ec: Vec<f64>,
        ep: Vec<f64>,
    ) -> Result<Self, LoadError> {
        let rows = t
            .into_iter()
            .zip(x)
            .zip(v)
            .zip(ec)
            .zip(ep)
            .map(|((((t, x), v), ec), ep)| [t, x, v, ec, ep].map(Cell::Number));
        Self::from_rows(rows)
    }

    /// Number of samples (always at least one)
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether the set holds no samples
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Time (s)
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Position (m)
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Velocity (m/s)
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Kinetic energy (J)
    pub fn ec(&self) -> &[f64] {
        &self.ec
    }

    /// Potential energy (J)
    pub fn ep(&self) -> &[f64] {
        &self.ep
    }

    /// Total energy (J), `ec[i] + ep[i]`
    pub fn etot(&self) -> &[f64] {
        &self.etot
    }

    /// Time span covered by the samples
    pub fn duration(&self) -> f64 {
        match (self.t.first(), self.t.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: [Option<f64>; 5]) -> Vec<Cell> {
        values.into_iter().map(Cell::from).collect()
    }

    #[test]
    fn test_from_rows_builds_total_energy() {
        let rows = vec![
            row([Some(0.0), Some(1.0), Some(0.0), Some(0.0), Some(2.0)]),
            row([Some(0.1), Some(0.5), Some(-1.0), Some(1.5), Some(0.5)]),
        ];
        let set = SampleSet::from_rows(rows).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.etot(), &[2.0, 2.0]);
        assert_eq!(set.v(), &[0.0, -1.0]);
    }

    #[test]
    fn test_rows_with_blanks_are_skipped() {
        let rows = vec![
            row([Some(0.0), Some(1.0), None, Some(0.0), Some(2.0)]),
            row([Some(0.1), Some(0.5), Some(-1.0), Some(1.5), Some(0.5)]),
            vec![Cell::Number(0.2), Cell::Text("  ".into())],
        ];
        let set = SampleSet::from_rows(rows).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.t(), &[0.1]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let mut r = row([Some(0.0), Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        r.push(Cell::Text("comment".into()));
        let set = SampleSet::from_rows(vec![r]).unwrap();
        assert_eq!(set.etot(), &[7.0]);
    }

    #[test]
    fn test_numeric_text_is_accepted() {
        let r: Vec<Cell> = ["0", " 1.5", "2", "3e-1", "-0.25"]
            .into_iter()
            .map(Cell::from)
            .collect();
        let set = SampleSet::from_rows(vec![r]).unwrap();
        assert_eq!(set.x(), &[1.5]);
        assert_eq!(set.etot(), &[0.3 + -0.25]);
    }

    #[test]
    fn test_non_numeric_cell_fails() {
        let rows = vec![
            row([Some(0.0), Some(1.0), Some(0.0), Some(0.0), Some(2.0)]),
            vec![
                Cell::Number(0.1),
                Cell::Number(0.5),
                Cell::Text("fast".into()),
                Cell::Number(1.0),
                Cell::Number(1.0),
            ],
        ];
        let err = SampleSet::from_rows(rows).unwrap_err();
        assert_eq!(
            err,
            LoadError::NonNumeric {
                row: 2,
                column: "velocity",
                value: "fast".into()
            }
        );
    }

    #[test]
    fn test_non_finite_cells_fail() {
        let rows = vec![
            row([Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0)]),
            row([Some(0.1), Some(0.0), Some(0.0), Some(50.0), Some(0.0)]),
            vec![
                Cell::Number(0.2),
                Cell::Number(0.0),
                Cell::Number(0.0),
                Cell::from("nan"),
                Cell::Number(0.0),
            ],
        ];
        let err = SampleSet::from_rows(rows).unwrap_err();
        assert_eq!(
            err,
            LoadError::NonNumeric {
                row: 3,
                column: "kinetic energy",
                value: "nan".into()
            }
        );

        assert_eq!(Cell::from("inf").to_f64(), None);
        assert_eq!(Cell::Number(f64::NAN).to_f64(), None);
        assert_eq!(Cell::Number(f64::NEG_INFINITY).to_f64(), None);
    }

    #[test]
    fn test_no_valid_rows() {
        let rows = vec![row([None, None, None, None, None])];
        assert_eq!(SampleSet::from_rows(rows), Err(LoadError::NoValidRows));

        let empty: Vec<Vec<Cell>> = Vec::new();
        assert_eq!(SampleSet::from_rows(empty), Err(LoadError::NoValidRows));
    }

    #[test]
    fn test_from_columns_truncates() {
        let set = SampleSet::from_columns(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0, 2.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.duration(), 1.0);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    fn any_cell() -> impl Strategy<Value = Cell> {
        prop_oneof![
            4 => (-1e6f64..1e6).prop_map(Cell::Number),
            1 => Just(Cell::Empty),
            1 => Just(Cell::Text(String::new())),
        ]
    }

    proptest! {
        #[test]
        fn test_sequences_stay_aligned(
            rows in prop::collection::vec(prop::collection::vec(any_cell(), 0..8), 0..60)
        ) {
            let complete = rows
                .iter()
                .filter(|r| r.len() >= REQUIRED_COLUMNS && !r[..REQUIRED_COLUMNS].iter().any(Cell::is_absent))
                .count();

            match SampleSet::from_rows(&rows) {
                Ok(set) => {
                    // Property: one entry per fully-populated row in every sequence
                    prop_assert_eq!(set.len(), complete);
                    for len in [set.x().len(), set.v().len(), set.ec().len(), set.ep().len(), set.etot().len()] {
                        prop_assert_eq!(len, set.t().len());
                    }
                    // Property: total energy is the exact sum
                    for i in 0..set.len() {
                        prop_assert_eq!(set.etot()[i], set.ec()[i] + set.ep()[i]);
                    }
                }
                Err(e) => {
                    prop_assert_eq!(complete, 0);
                    prop_assert_eq!(e, LoadError::NoValidRows);
                }
            }
        }
    }
}
