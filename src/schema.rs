use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::error::Result;

/// Value written for a variant that was deliberately not run at a size.
pub const SKIPPED_SENTINEL: i64 = -1;

/// Suffix appended to a variant label to form its column name.
pub const TIME_FIELD_SUFFIX: &str = "_time_us";

/// One cell of the results table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    /// Mean time per iteration, microseconds.
    Measured(f64),
    /// The variant does not support this input size.
    Skipped,
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Cell::Measured(us) if !us.is_finite() => Err(S::Error::custom(format!(
                "non-finite duration {us} cannot be reported"
            ))),
            Cell::Measured(us) => serializer.serialize_f64(us),
            Cell::Skipped => serializer.serialize_i64(SKIPPED_SENTINEL),
        }
    }
}

/// All variants measured at one input size.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub n: u64,
    /// `(variant, cell)` in variant declaration order.
    pub cells: Vec<(String, Cell)>,
}

impl ResultRow {
    pub fn cell(&self, variant: &str) -> Option<Cell> {
        self.cells
            .iter()
            .find(|(label, _)| label == variant)
            .map(|(_, cell)| *cell)
    }
}

impl Serialize for ResultRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len() + 1))?;
        map.serialize_entry("n", &self.n)?;
        for (variant, cell) in &self.cells {
            map.serialize_entry(&format!("{variant}{TIME_FIELD_SUFFIX}"), cell)?;
        }
        map.end()
    }
}

/// Top-level output of one full benchmark invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportDocument {
    pub algorithm: String,
    pub language: String,
    pub iterations: u64,
    pub results: Vec<ResultRow>,
}

impl ReportDocument {
    pub fn row(&self, n: u64) -> Option<&ResultRow> {
        self.results.iter().find(|row| row.n == n)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
