//! Test utilities for the rainfall filter
//!
//! Shared fixtures and helpers used across the test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use super::stats::FilterStats;


/// Sensor export with the canonical column name and a mix of readings
pub fn create_sensor_readings_csv() -> String {
    [
        "timestamp,drain_id,water_level_percent,rainfall_mm_per_hour,flow_rate_lps,turbidity_ntu",
        "2024-06-01T00:00:00Z,1,42.5,0.0,12.1,3.2",
        "2024-06-01T00:15:00Z,1,44.0,2.75,13.4,3.9",
        "2024-06-01T00:30:00Z,2,38.1,0,11.0,2.8",
        "2024-06-01T00:45:00Z,2,39.6, 0.4 ,11.7,3.0",
        "2024-06-01T01:00:00Z,3,51.2,,15.2,4.1",
        "2024-06-01T01:15:00Z,3,52.0,n/a,15.0,4.0",
    ]
    .join("\n")
}

/// Header strings as the resolver expects them
pub fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Run the in-memory filter and return the output text with its stats
pub fn run_filter(input: &str) -> (String, FilterStats) {
    let mut output = Vec::new();
    let stats = super::filter_readings(input.as_bytes(), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), stats)
}

/// Output lines without the CRLF terminators
pub fn output_lines(output: &str) -> Vec<&str> {
    output.split_terminator("\r\n").collect()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
