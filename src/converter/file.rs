use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::models::ConversionSummary;
use crate::parsers::parse_dump_file;
use crate::utils::write_pretty_json;

/// Convert one dump file into a JSON array of records
///
/// Reads at most `row_limit` lines from `input`, skipping (and logging) lines that are
/// malformed or carry invalid metadata JSON, then writes every accepted record to
/// `output` as a 4-space indented JSON array. Existing output is replaced atomically.
///
/// # Errors
///
/// Returns an error if `input` cannot be read or `output` cannot be written. Bad lines
/// never fail the conversion.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use dump_converter::convert_file;
///
/// let summary = convert_file(
///     Path::new("data/unprocessed/raw_items.txt"),
///     Path::new("data/processed/output_items.json"),
///     10_000,
/// )?;
/// println!("{} rows", summary.rows_written);
/// # Ok::<(), dump_converter::ConvertError>(())
/// ```
pub fn convert_file(input: &Path, output: &Path, row_limit: usize) -> Result<ConversionSummary> {
    let result = parse_dump_file(input, row_limit)?;
    write_pretty_json(output, &result.records)?;

    info!(
        "Processed {} rows from {} to {}.",
        result.records.len(),
        input.display(),
        output.display()
    );
    if !result.skipped.is_empty() {
        debug!(
            "Skipped {} lines in {} ({} malformed, {} invalid metadata)",
            result.skipped.len(),
            input.display(),
            result.malformed_count(),
            result.invalid_metadata_count()
        );
    }
    if result.truncated {
        info!("Row limit of {} reached in {}; remaining lines ignored", row_limit, input.display());
    }

    Ok(ConversionSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows_written: result.records.len(),
        lines_skipped: result.skipped.len(),
        truncated: result.truncated,
    })
}
