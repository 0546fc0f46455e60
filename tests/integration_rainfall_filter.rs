//! Integration tests for the rainfall filter
//!
//! These tests run the filter end to end against files in a scratch
//! directory, both through the library API and through the built binary.

use rainfall_filter::{Error, FilterConfig, RainfallFilter};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Write `content` to `name` inside `dir` and return the path
fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(input: &Path, output: &Path) -> rainfall_filter::Result<rainfall_filter::FilterStats> {
    RainfallFilter::new(FilterConfig::new(input, output)).run()
}

/// Purpose: Reproduce the reference scenario byte for byte
#[test]
fn test_reference_scenario_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "readings.csv",
        "station, rainfall_mm_per_hour, temp\nA, 0.0, 20\nB, 3.5, 21\nC,  , 19\n",
    );
    let output = temp_dir.path().join("out").join("rain.csv");

    let stats = run(&input, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "station,rainfall_mm_per_hour,temp\r\nB,3.5,21\r\n"
    );
    assert_eq!(stats.rows_written, 1);
    assert_eq!(
        stats.summary_line(&output),
        format!("Wrote 1 rows to {}", output.display())
    );
}

/// Purpose: Heuristic column match drives the filter when the exact name is absent
#[test]
fn test_fallback_column_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "readings.csv",
        "Station, Rainfall (mm), Temp\nA, 0, 20\nB, 1.25, 21\nC, -0.5, 22\n",
    );
    let output = temp_dir.path().join("rain.csv");

    let stats = run(&input, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Station,Rainfall (mm),Temp\r\nB,1.25,21\r\nC,-0.5,22\r\n"
    );
    assert_eq!(stats.rows_written, 2);
}

/// Purpose: No rainfall-like column is fatal and leaves no output file
#[test]
fn test_missing_column_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "readings.csv",
        "station,temp,humidity\nA,20,80\n",
    );
    let output = temp_dir.path().join("nested").join("rain.csv");

    let result = run(&input, &output);

    assert!(matches!(result, Err(Error::RainfallColumnNotFound { .. })));
    assert!(!output.exists());
    // Directory creation happens before the header is read
    assert!(output.parent().unwrap().is_dir());
}

/// Purpose: An unreadable input is an I/O failure with no output produced
#[test]
fn test_missing_input_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("does_not_exist.csv");
    let output = temp_dir.path().join("rain.csv");

    let result = run(&input, &output);

    match result {
        Err(Error::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected I/O error, got {:?}", other),
    }
    assert!(!output.exists());
}

/// Purpose: Running twice on the same input gives byte-identical output
#[test]
fn test_rerun_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "readings.csv",
        "timestamp,drain_id,rainfall_mm_per_hour\n\
         2024-06-01T00:00:00Z,1,0\n\
         2024-06-01T00:15:00Z,1, 4.5\n\
         2024-06-01T00:30:00Z,2,oops\n\
         2024-06-01T00:45:00Z,2\n",
    );
    let output = temp_dir.path().join("rain.csv");

    run(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();
    run(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

/// Purpose: Reported count equals the number of data lines written
#[test]
fn test_reported_count_matches_output_lines() {
    let temp_dir = TempDir::new().unwrap();
    let mut content = String::from("drain_id,rainfall_mm_per_hour\n");
    for i in 0..50 {
        let rainfall = if i % 3 == 0 { "0.0".to_string() } else { format!("{}.5", i) };
        content.push_str(&format!("{},{}\n", i, rainfall));
    }
    content.push_str("short\n");
    let input = write_input(temp_dir.path(), "readings.csv", &content);
    let output = temp_dir.path().join("rain.csv");

    let stats = run(&input, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let data_lines = written.split_terminator("\r\n").count() - 1;
    assert_eq!(stats.rows_written, data_lines);
    assert_eq!(stats.rows_written, 33);
    assert_eq!(stats.rows_skipped, 1);
    assert!(stats.is_balanced());
}

/// Purpose: Binary prints exactly the summary line on success
#[test]
fn test_binary_prints_summary() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "readings.csv",
        "station,rainfall_mm_per_hour\nA,2.0\nB,0\n",
    );
    let output = temp_dir.path().join("out").join("rain.csv");

    let result = Command::new(env!("CARGO_BIN_EXE_rainfall_filter"))
        .arg(&input)
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8(result.stdout).unwrap(),
        format!("Wrote 1 rows to {}\n", output.display())
    );
    assert!(result.stderr.is_empty());
}

/// Purpose: Binary exits with an error status and a readable message
#[test]
fn test_binary_reports_missing_column() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "readings.csv", "station,temp\nA,20\n");
    let output = temp_dir.path().join("rain.csv");

    let result = Command::new(env!("CARGO_BIN_EXE_rainfall_filter"))
        .arg(&input)
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("Could not find rainfall column in header"));
    assert!(!output.exists());
}
