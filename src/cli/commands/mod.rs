//! Command implementation for the rainfall filter CLI
//!
//! Resolves paths, runs the filter and prints the one-line summary.

pub mod shared;

use crate::FilterStats;
use crate::app::services::rainfall_filter::RainfallFilter;
use crate::cli::args::Args;
use anyhow::{Context, Result};
use shared::setup_logging;
use tracing::{debug, info};

/// Main command runner for the rainfall filter
///
/// 1. Set up logging
/// 2. Resolve input/output paths
/// 3. Run the filter
/// 4. Print `Wrote <N> rows to <path>` on stdout
pub fn run(args: Args) -> Result<FilterStats> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args
        .to_config()
        .context("Failed to resolve default input/output paths")?;
    info!("Input: {}", config.input_path.display());
    info!("Output: {}", config.output_path.display());

    let filter = RainfallFilter::new(config);
    let stats = filter.run()?;

    println!("{}", stats.summary_line(&filter.config().output_path));
    Ok(stats)
}
