//! Command-line argument definitions for the rainfall filter
//!
//! Two optional positional paths and the usual verbosity switches.

use crate::config::FilterConfig;
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::Result;
use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use std::path::PathBuf;

/// CLI arguments for the rainfall filter
///
/// Keeps only the sensor readings with non-zero rainfall.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rainfall_filter",
    version,
    about = "Keep only the sensor readings with non-zero rainfall",
    long_about = "Reads a comma-separated file of drain sensor readings, finds the rainfall \
                  column (rainfall_mm_per_hour, or the first header mentioning both 'rainfall' \
                  and 'mm') and writes the header plus every row whose rainfall is non-zero. \
                  All written fields are whitespace-trimmed."
)]
pub struct Args {
    /// Input CSV of sensor readings
    ///
    /// Defaults to input/sensor_readings.csv next to the executable.
    /// An empty string also selects the default.
    #[arg(
        value_name = "INPUT",
        help = "Input CSV of sensor readings",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub input_path: Option<PathBuf>,

    /// Output CSV for rows with non-zero rainfall
    ///
    /// Defaults to output/rainfall_nonzero.csv next to the executable.
    /// Missing parent directories are created. An empty string also selects
    /// the default.
    #[arg(
        value_name = "OUTPUT",
        help = "Output CSV for rows with non-zero rainfall",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub output_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the log level implied by `--verbose` / `--quiet`
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Resolve the input/output paths, applying defaults for missing ones
    pub fn to_config(&self) -> Result<FilterConfig> {
        FilterConfig::resolve(self.input_path.clone(), self.output_path.clone())
    }
}
