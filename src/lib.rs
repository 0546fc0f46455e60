//! Rainfall Filter Library
//!
//! Reads a comma-separated file of drain sensor readings, locates the
//! rainfall column and writes out only the rows whose rainfall reading is
//! non-zero, keeping the header and every column.
//!
//! This library provides tools for:
//! - Resolving the rainfall column from a header, by exact name or heuristic
//! - Converting messy rainfall fields with a lenient fallback rule
//! - Streaming rows from input to output in a single pass
//! - Reporting how many rows were written, skipped and excluded

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod services {
        pub mod rainfall_filter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::services::rainfall_filter::{FilterStats, RainfallColumn, RainfallFilter};
pub use config::FilterConfig;

/// Result type alias for the rainfall filter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for rainfall filtering operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Input file has no header line
    #[error("Input file '{path}' is empty; expected a header line")]
    EmptyInput { path: String },

    /// No header matches the rainfall column, exactly or by heuristic
    #[error("Could not find rainfall column in header of '{path}' (columns: {})", .header.join(", "))]
    RainfallColumnNotFound { path: String, header: Vec<String> },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(file: impl Into<String>, message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty input error
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::EmptyInput { path: path.into() }
    }

    /// Create a rainfall column not found error
    pub fn rainfall_column_not_found(path: impl Into<String>, header: &[String]) -> Self {
        Self::RainfallColumnNotFound {
            path: path.into(),
            header: header.to_vec(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
