//! Dump file conversion
//!
//! # Error Handling Strategy
//!
//! - **Line-level errors**: handled inside the parsers; logged and skipped.
//! - **File-level errors**: [`convert_file`] returns them to the caller. The batch run
//!   ([`convert_all_files`]) logs each one, records it in the
//!   [`BatchReport`](crate::models::BatchReport) and moves on to the next file.
//! - **Run-level errors**: an invalid row limit or unusable directories abort the batch
//!   before any file is converted.

pub mod batch;
pub mod discovery;
pub mod file;

pub use batch::convert_all_files;
pub use discovery::{InputFile, discover_input_files};
pub use file::convert_file;
