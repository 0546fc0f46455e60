//! Rainfall filter for drain sensor readings
//!
//! Streams a comma-separated readings file and keeps only the rows whose
//! rainfall measurement is non-zero. The header and every column are
//! preserved; all written fields are whitespace-trimmed.
//!
//! ## Architecture
//!
//! - [`column_resolver`] - Locating the rainfall column in the header
//! - [`value_parser`] - Lenient rainfall conversion and the inclusion test
//! - [`filter`] - The single streaming pass from input to output
//! - [`stats`] - Row counters and the summary line
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rainfall_filter::{FilterConfig, RainfallFilter};
//!
//! # fn example() -> rainfall_filter::Result<()> {
//! let config = FilterConfig::new("input/sensor_readings.csv", "output/rainfall_nonzero.csv");
//! let stats = RainfallFilter::new(config).run()?;
//!
//! println!("{} of {} rows had rainfall", stats.rows_written, stats.rows_read);
//! # Ok(())
//! # }
//! ```

pub mod column_resolver;
pub mod filter;
pub mod stats;
pub mod value_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_resolver::{ColumnMatch, RainfallColumn};
pub use filter::{RainfallFilter, ReadingsSource, RowOutcome, evaluate_row, filter_readings};
pub use stats::FilterStats;
pub use value_parser::{RainfallValue, parse_rainfall};
