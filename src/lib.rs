//! Dump Converter - turn tab-separated dump files into JSON arrays
//!
//! Each input line carries five tab-separated fields: `type`, `key`, `revision`,
//! `created` and a JSON `metadata` blob. This library:
//!
//! - Parses dump lines into [`Record`]s, skipping malformed lines and invalid metadata
//! - Caps the number of lines read per file
//! - Writes each file's records as a pretty-printed JSON array
//! - Converts a whole directory of `.txt` dumps into `output_*.json` files
//!
//! # Example
//!
//! ```no_run
//! use dump_converter::{ConverterConfig, convert_all_files};
//!
//! let report = convert_all_files(&ConverterConfig::default())?;
//! println!("Converted {} files ({} rows)", report.converted.len(), report.total_rows());
//! # Ok::<(), dump_converter::ConvertError>(())
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::ConverterConfig;
pub use converter::{convert_all_files, convert_file};
pub use error::{ConvertError, LineError};
pub use models::{BatchReport, ConversionSummary, Record};
pub use parsers::{parse_dump_file, parse_record_line};
pub use utils::derive_output_name;
