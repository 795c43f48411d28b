use std::path::PathBuf;

use crate::error::{ConvertError, LineError};
use crate::models::Record;

/// A line that produced no record
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based
    pub line_number: usize,
    pub reason: LineError,
}

/// Records read from a single dump file, in input order
#[derive(Debug, Default)]
pub struct ConversionResult {
    pub records: Vec<Record>,
    /// Lines considered, never more than the row limit
    pub lines_read: usize,
    pub skipped: Vec<SkippedLine>,
    /// Set when lines past the row limit were left unread
    pub truncated: bool,
}

impl ConversionResult {
    pub fn malformed_count(&self) -> usize {
        self.skipped.iter().filter(|s| matches!(s.reason, LineError::Malformed { .. })).count()
    }

    pub fn invalid_metadata_count(&self) -> usize {
        self.skipped.iter().filter(|s| matches!(s.reason, LineError::InvalidMetadata(_))).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_written: usize,
    pub lines_skipped: usize,
    pub truncated: bool,
}

#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: ConvertError,
}

/// Outcome of converting every dump file in a directory
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConversionSummary>,
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.converted.iter().map(|s| s.rows_written).sum()
    }

    pub fn file_count(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}
