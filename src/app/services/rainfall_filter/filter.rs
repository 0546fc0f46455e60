//! Streaming rainfall filter
//!
//! One linear pass: read the header, resolve the rainfall column, then
//! copy every row with non-zero rainfall to the output. Rows are never
//! buffered beyond the one being evaluated.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::{debug, info, trace};

use super::column_resolver::{ColumnMatch, RainfallColumn, normalize_header};
use super::stats::FilterStats;
use super::value_parser::{RainfallValue, parse_rainfall};
use crate::config::FilterConfig;
use crate::constants::{BOM_CHAR, FIELD_DELIMITER, UTF8_BOM};
use crate::{Error, Result};

/// What happened to a single data row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOutcome {
    /// Rainfall is non-zero; the row goes to the output
    Qualifying(f64),
    /// Row has no field at the rainfall index
    Skipped,
    /// Rainfall is zero within tolerance, or unreadable
    Excluded(RainfallValue),
}

/// Decide the fate of one data row
pub fn evaluate_row(record: &StringRecord, column: &RainfallColumn) -> RowOutcome {
    let Some(raw) = column.field(record) else {
        return RowOutcome::Skipped;
    };

    let value = parse_rainfall(raw);
    if value.is_nonzero() {
        RowOutcome::Qualifying(value.value())
    } else {
        RowOutcome::Excluded(value)
    }
}

/// Filter for a configured input/output pair
#[derive(Debug, Clone)]
pub struct RainfallFilter {
    config: FilterConfig,
}

impl RainfallFilter {
    /// Create a filter for the given paths
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Paths this filter reads from and writes to
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Run the filter from file to file
    ///
    /// The output directory is created first. The output file itself is only
    /// created once the header has been read and the rainfall column
    /// resolved, so a header failure leaves no output file behind.
    pub fn run(&self) -> Result<FilterStats> {
        let input_path = &self.config.input_path;
        let output_path = &self.config.output_path;
        info!(
            "Filtering rainfall readings: {} -> {}",
            input_path.display(),
            output_path.display()
        );

        self.config.prepare_output_directory()?;

        let input = File::open(input_path).map_err(|e| {
            Error::io(
                format!("Failed to open input file {}", input_path.display()),
                e,
            )
        })?;
        let source = ReadingsSource::from_reader(input, input_path.display().to_string())?;

        let output = create_output(output_path)?;
        let stats = source.write_to(output, &output_path.display().to_string())?;

        info!(
            "Filtering complete: {} read, {} written, {} skipped, {} excluded ({} unreadable)",
            stats.rows_read,
            stats.rows_written,
            stats.rows_skipped,
            stats.rows_excluded,
            stats.values_defaulted
        );
        debug!("Retention rate: {:.1}%", stats.retention_rate());

        Ok(stats)
    }
}

/// Readings input whose header has been read and rainfall column resolved
pub struct ReadingsSource<R: Read> {
    reader: csv::Reader<BufReader<R>>,
    source_name: String,
    header: Vec<String>,
    column: RainfallColumn,
}

impl<R: Read> ReadingsSource<R> {
    /// Read the header from `input` and resolve the rainfall column
    ///
    /// The header is always the first physical line. A blank first line is
    /// an empty header, and a leading UTF-8 byte order mark stays part of
    /// the first header name.
    ///
    /// `source_name` is only used in error messages and logs.
    pub fn from_reader(input: R, source_name: impl Into<String>) -> Result<Self> {
        let source_name = source_name.into();
        let mut input = BufReader::new(input);

        let start = input
            .fill_buf()
            .map_err(|e| Error::io(format!("Failed to read {}", source_name), e))?;
        let has_bom = start.starts_with(UTF8_BOM);
        if has_bom {
            input.consume(UTF8_BOM.len());
        }

        // The csv reader skips blank lines, so check the first line here
        let start = input
            .fill_buf()
            .map_err(|e| Error::io(format!("Failed to read {}", source_name), e))?;
        if matches!(start.first(), Some(b'\n' | b'\r')) {
            let header = if has_bom { vec![BOM_CHAR.to_string()] } else { Vec::new() };
            return Err(Error::rainfall_column_not_found(&source_name, &header));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut first_row = StringRecord::new();
        let has_header = reader
            .read_record(&mut first_row)
            .map_err(|e| Error::csv(&source_name, "Failed to read header row", e))?;
        if !has_header {
            if has_bom {
                return Err(Error::rainfall_column_not_found(
                    &source_name,
                    &[BOM_CHAR.to_string()],
                ));
            }
            return Err(Error::empty_input(source_name));
        }

        let mut header = normalize_header(&first_row);
        if has_bom {
            if let Some(first) = header.first_mut() {
                let raw = first_row.get(0).unwrap_or_default();
                *first = format!("{}{}", BOM_CHAR, raw).trim().to_string();
            }
        }
        let column = RainfallColumn::resolve(&header)
            .ok_or_else(|| Error::rainfall_column_not_found(&source_name, &header))?;

        match column.matched_by {
            ColumnMatch::Exact => info!(
                "Using rainfall column '{}' at index {}",
                column.name, column.index
            ),
            ColumnMatch::Fallback => info!(
                "Exact rainfall column not found; using '{}' at index {}",
                column.name, column.index
            ),
        }

        Ok(Self {
            reader,
            source_name,
            header,
            column,
        })
    }

    /// Trimmed header names
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Resolved rainfall column
    pub fn column(&self) -> &RainfallColumn {
        &self.column
    }

    /// Stream the remaining rows, writing the header and qualifying rows to `output`
    pub fn write_to<W: Write>(mut self, output: W, sink_name: &str) -> Result<FilterStats> {
        let mut writer = WriterBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .flexible(true)
            .terminator(Terminator::CRLF)
            .from_writer(output);

        writer
            .write_record(&self.header)
            .map_err(|e| Error::csv(sink_name, "Failed to write header row", e))?;

        let mut stats = FilterStats::new();
        let mut record = StringRecord::new();

        while self
            .reader
            .read_record(&mut record)
            .map_err(|e| Error::csv(&self.source_name, "Failed to read row", e))?
        {
            let outcome = evaluate_row(&record, &self.column);
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            match outcome {
                RowOutcome::Qualifying(value) => {
                    writer
                        .write_record(record.iter().map(str::trim))
                        .map_err(|e| Error::csv(sink_name, "Failed to write row", e))?;
                    trace!("Line {}: rainfall {} written", line, value);
                }
                RowOutcome::Skipped => {
                    debug!(
                        "Line {}: skipped, {} fields but rainfall is column {}",
                        line,
                        record.len(),
                        self.column.index + 1
                    );
                }
                RowOutcome::Excluded(RainfallValue::Defaulted) => {
                    debug!(
                        "Line {}: unreadable rainfall '{}', treated as zero",
                        line,
                        self.column.field(&record).unwrap_or_default()
                    );
                }
                RowOutcome::Excluded(RainfallValue::Parsed(_)) => {}
            }

            stats.record(&outcome);
        }

        writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush output {}", sink_name), e))?;

        Ok(stats)
    }
}

/// Filter in-memory or arbitrary streams without touching the filesystem
pub fn filter_readings<R: Read, W: Write>(input: R, output: W) -> Result<FilterStats> {
    ReadingsSource::from_reader(input, "<input>")?.write_to(output, "<output>")
}

fn create_output(output_path: &Path) -> Result<File> {
    File::create(output_path).map_err(|e| {
        Error::io(
            format!("Failed to create output file {}", output_path.display()),
            e,
        )
    })
}
