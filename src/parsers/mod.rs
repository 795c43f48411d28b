//! Parsers for tab-separated dump files
//!
//! # Error Handling Strategy
//!
//! - **Individual line failures**: Lines with fewer than 5 fields or with unparsable metadata
//!   JSON are logged as warnings and skipped. A bad line never fails the file, no matter how
//!   many there are.
//!
//! - **File failures**: An input that cannot be opened or decoded as UTF-8 is returned as a
//!   [`ConvertError::Read`](crate::error::ConvertError::Read) for the caller to handle.

pub mod dump;
pub mod record_line;

pub use dump::parse_dump_file;
pub use record_line::{MIN_FIELDS, parse_record_line};
