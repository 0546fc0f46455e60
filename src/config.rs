//! Path configuration for a filter run.
//!
//! The only configuration surface is the pair of input/output paths.
//! Anything not given on the command line falls back to a fixed location
//! next to the running executable.

use crate::constants::{
    DEFAULT_INPUT_DIR, DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILENAME,
};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved input and output locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// CSV file of sensor readings to read
    pub input_path: PathBuf,

    /// CSV file to write the qualifying rows to
    pub output_path: PathBuf,
}

impl FilterConfig {
    /// Create a configuration from explicit paths
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Resolve paths, filling gaps from the program directory
    ///
    /// An empty path counts as missing. The program directory is only looked
    /// up when at least one path is missing.
    pub fn resolve(input_path: Option<PathBuf>, output_path: Option<PathBuf>) -> Result<Self> {
        let given = |path: Option<PathBuf>| path.filter(|p| !p.as_os_str().is_empty());

        match (given(input_path), given(output_path)) {
            (Some(input), Some(output)) => Ok(Self::new(input, output)),
            (input, output) => {
                let program_dir = program_directory()?;
                Ok(Self::with_defaults_from(&program_dir, input, output))
            }
        }
    }

    /// Fill missing paths with the defaults rooted at `program_dir`
    pub fn with_defaults_from(
        program_dir: &Path,
        input_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
    ) -> Self {
        let input_path = input_path.unwrap_or_else(|| default_input_path(program_dir));
        let output_path = output_path.unwrap_or_else(|| default_output_path(program_dir));

        Self {
            input_path,
            output_path,
        }
    }

    /// Create the output file's parent directory and any missing ancestors
    ///
    /// Idempotent; a bare file name has no parent to create.
    pub fn prepare_output_directory(&self) -> Result<()> {
        let Some(parent) = self.output_path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() {
            return Ok(());
        }

        fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", parent.display()),
                e,
            )
        })?;
        debug!("Output directory ready: {}", parent.display());
        Ok(())
    }
}

/// Default input file: `<program_dir>/input/sensor_readings.csv`
pub fn default_input_path(program_dir: &Path) -> PathBuf {
    program_dir
        .join(DEFAULT_INPUT_DIR)
        .join(DEFAULT_INPUT_FILENAME)
}

/// Default output file: `<program_dir>/output/rainfall_nonzero.csv`
pub fn default_output_path(program_dir: &Path) -> PathBuf {
    program_dir
        .join(DEFAULT_OUTPUT_DIR)
        .join(DEFAULT_OUTPUT_FILENAME)
}

/// Directory containing the running executable
pub fn program_directory() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::io("Failed to locate the running executable", e))?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::configuration(format!(
            "Executable path {} has no parent directory",
            exe.display()
        ))
    })
}
