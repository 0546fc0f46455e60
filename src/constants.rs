//! Application constants for the rainfall filter
//!
//! Column names, numeric tolerance and default file locations used
//! throughout the filter.

// =============================================================================
// Column Resolution
// =============================================================================

/// Exact (case-sensitive) header name of the rainfall column
pub const RAINFALL_COLUMN: &str = "rainfall_mm_per_hour";

/// Substrings that must both appear in a lowercased header for the fallback match
pub const RAINFALL_FALLBACK_TERMS: &[&str] = &["rainfall", "mm"];

// =============================================================================
// Inclusion Test
// =============================================================================

/// Values whose magnitude does not exceed this are treated as zero rainfall
pub const RAINFALL_TOLERANCE: f64 = 1e-9;

/// Value used when a rainfall field cannot be read as a number
pub const DEFAULT_RAINFALL_VALUE: f64 = 0.0;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Input directory, relative to the program directory
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Input file name inside [`DEFAULT_INPUT_DIR`]
pub const DEFAULT_INPUT_FILENAME: &str = "sensor_readings.csv";

/// Output directory, relative to the program directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Output file name inside [`DEFAULT_OUTPUT_DIR`]
pub const DEFAULT_OUTPUT_FILENAME: &str = "rainfall_nonzero.csv";

/// Field delimiter for both input and output
pub const FIELD_DELIMITER: u8 = b',';

/// UTF-8 byte order mark as it appears at the start of a file
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Byte order mark kept at the front of the first header name
pub const BOM_CHAR: char = '\u{feff}';

// =============================================================================
// Logging
// =============================================================================

/// Tracing target used when building the default log filter
pub const LOG_TARGET: &str = "rainfall_filter";

/// Log level used when neither `-v` nor `-q` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a header name satisfies the fallback rainfall heuristic
///
/// The name is lowercased and must contain every term in
/// [`RAINFALL_FALLBACK_TERMS`], in any position.
pub fn is_fallback_rainfall_header(header: &str) -> bool {
    let lowered = header.to_lowercase();
    RAINFALL_FALLBACK_TERMS
        .iter()
        .all(|term| lowered.contains(term))
}

/// Check if a rainfall value counts as non-zero
pub fn exceeds_tolerance(value: f64) -> bool {
    value.abs() > RAINFALL_TOLERANCE
}
