//! Data models for dump conversion.
//!
//! - [`Record`] - one accepted input line, serialized into the output array
//! - [`ConversionResult`] - everything read from one input file
//! - [`ConversionSummary`] - what `convert_file` reports back after writing
//! - [`BatchReport`] - per-file outcomes of a whole directory run

pub mod conversion;
pub mod record;

pub use conversion::{BatchReport, ConversionResult, ConversionSummary, FileFailure, SkippedLine};
pub use record::Record;
