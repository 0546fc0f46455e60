//! Rainfall column resolution from the header row
//!
//! The exact column name wins; otherwise the first header (left to right)
//! whose lowercased name contains both "rainfall" and "mm" is used.

use crate::constants::{RAINFALL_COLUMN, is_fallback_rainfall_header};
use csv::StringRecord;

/// How the rainfall column was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMatch {
    /// Header equals the canonical column name
    Exact,
    /// Header matched the substring heuristic
    Fallback,
}

/// Position and name of the rainfall column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainfallColumn {
    /// Zero-based column index
    pub index: usize,

    /// Trimmed header name at `index`
    pub name: String,

    /// Which rule located the column
    pub matched_by: ColumnMatch,
}

impl RainfallColumn {
    /// Resolve the rainfall column from trimmed header names
    ///
    /// Returns `None` when neither the exact name nor the heuristic matches.
    pub fn resolve(header: &[String]) -> Option<Self> {
        if let Some(index) = header.iter().position(|name| name == RAINFALL_COLUMN) {
            return Some(Self {
                index,
                name: header[index].clone(),
                matched_by: ColumnMatch::Exact,
            });
        }

        header
            .iter()
            .position(|name| is_fallback_rainfall_header(name))
            .map(|index| Self {
                index,
                name: header[index].clone(),
                matched_by: ColumnMatch::Fallback,
            })
    }

    /// Get the raw rainfall field of a row, if the row is long enough
    pub fn field<'a>(&self, record: &'a StringRecord) -> Option<&'a str> {
        record.get(self.index)
    }
}

/// Trim every header field
pub fn normalize_header(record: &StringRecord) -> Vec<String> {
    record.iter().map(|field| field.trim().to_string()).collect()
}
