//! Input processing API for game record files
//!
//! Parses whole puzzle inputs (one record per line) and renders the result
//! in one of the named output formats.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::parser::ast::{Color, GameRecord};
use crate::parser::{parse_line, ParseError};

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report: record count, rounds, per-color maxima
    Summary,
    /// Pretty-printed JSON array of records
    Json,
    /// Canonical record text, one line per record
    Canonical,
}

impl OutputFormat {
    /// Parse a format string like "summary" or "json"
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        match format {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "canonical" => Ok(OutputFormat::Canonical),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Errors that can occur while processing an input
#[derive(Debug)]
pub enum ProcessingError {
    /// The requested output format is not recognized
    InvalidFormat(String),
    /// A line of the input was rejected; `line` is 1-based
    Line { line: usize, source: ParseError },
    /// The input file could not be read
    Io(std::io::Error),
    /// The parsed records could not be serialized
    Serialization(serde_json::Error),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => {
                write!(f, "unknown output format: {}", format)
            }
            ProcessingError::Line { line, source } => write!(f, "line {}: {}", line, source),
            ProcessingError::Io(error) => write!(f, "failed to read input: {}", error),
            ProcessingError::Serialization(error) => {
                write!(f, "failed to serialize records: {}", error)
            }
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Line { source, .. } => Some(source),
            ProcessingError::Io(error) => Some(error),
            ProcessingError::Serialization(error) => Some(error),
            ProcessingError::InvalidFormat(_) => None,
        }
    }
}

/// Parse every non-blank line of an input, in order.
///
/// The first rejected line aborts processing, reported with its 1-based
/// line number.
pub fn parse_input(input: &str) -> Result<Vec<GameRecord>, ProcessingError> {
    let mut records = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_line(line).map_err(|source| ProcessingError::Line {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Parse an input and render it in the requested format
pub fn process_input(input: &str, format: OutputFormat) -> Result<String, ProcessingError> {
    let records = parse_input(input)?;
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&records).map_err(ProcessingError::Serialization)
        }
        OutputFormat::Canonical => {
            let mut out = String::new();
            for record in &records {
                out.push_str(&record.to_string());
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Summary => Ok(render_summary(&records)),
    }
}

/// Read a file and render it in the requested format
pub fn process_file(
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    let input = fs::read_to_string(path).map_err(ProcessingError::Io)?;
    process_input(&input, format)
}

fn render_summary(records: &[GameRecord]) -> String {
    let round_total: usize = records.iter().map(|record| record.rounds.len()).sum();
    let mut out = format!("{} records, {} rounds\n", records.len(), round_total);
    for color in Color::ALL {
        let max = records
            .iter()
            .map(|record| record.max_count(color))
            .max()
            .unwrap_or(0);
        out.push_str(&format!("max {}: {}\n", color, max));
    }
    out
}
