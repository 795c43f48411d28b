//! Error types for dump conversion
//!
//! Two layers:
//!
//! - [`LineError`]: a single input line was rejected. Always recovered by the caller
//!   (logged and skipped), never fatal.
//! - [`ConvertError`]: a whole file (or the whole run) could not be processed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parsers::MIN_FIELDS;

/// Why an input line produced no record
#[derive(Error, Debug)]
pub enum LineError {
    #[error("expected at least {} tab-separated fields, found {fields}", MIN_FIELDS)]
    Malformed { fields: usize },

    #[error("invalid metadata JSON: {0}")]
    InvalidMetadata(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write output file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to read input directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("Output file {} is already produced by {}", .output.display(), .first.display())]
    OutputCollision { output: PathBuf, first: PathBuf },

    #[error("Row limit must be at least 1")]
    InvalidRowLimit,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
