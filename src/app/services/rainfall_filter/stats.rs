//! Row counters for a filter run
//!
//! Every data row ends up in exactly one of three buckets: written,
//! skipped (too short to hold a rainfall field) or excluded (rainfall
//! within tolerance of zero).

use std::path::Path;

use super::filter::RowOutcome;

/// Counters collected during a single pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Data rows read after the header
    pub rows_read: usize,

    /// Rows written to the output
    pub rows_written: usize,

    /// Rows too short to contain the rainfall field
    pub rows_skipped: usize,

    /// Rows whose rainfall was zero within tolerance
    pub rows_excluded: usize,

    /// Excluded rows whose rainfall field could not be read as a number
    pub values_defaulted: usize,
}

impl FilterStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one row outcome
    pub fn record(&mut self, outcome: &RowOutcome) {
        self.rows_read += 1;
        match outcome {
            RowOutcome::Qualifying(_) => self.rows_written += 1,
            RowOutcome::Skipped => self.rows_skipped += 1,
            RowOutcome::Excluded(value) => {
                self.rows_excluded += 1;
                if value.is_defaulted() {
                    self.values_defaulted += 1;
                }
            }
        }
    }

    /// Check that every row read landed in exactly one bucket
    pub fn is_balanced(&self) -> bool {
        self.rows_read == self.rows_written + self.rows_skipped + self.rows_excluded
            && self.values_defaulted <= self.rows_excluded
    }

    /// Percentage of rows read that were written
    pub fn retention_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_written as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// One-line completion message
    pub fn summary_line(&self, output_path: &Path) -> String {
        format!(
            "Wrote {} rows to {}",
            self.rows_written,
            output_path.display()
        )
    }
}
