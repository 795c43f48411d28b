use std::collections::HashMap;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::config::ConverterConfig;
use crate::converter::discovery::discover_input_files;
use crate::converter::file::convert_file;
use crate::error::{ConvertError, Result};
use crate::models::{BatchReport, FileFailure};
use crate::utils::{derive_output_name, ensure_dir};

/// Convert every dump file in the unprocessed directory
///
/// Creates the processed directory if needed, then converts each `.txt` file (sorted by
/// name) into `output_<name>.json`. A file that fails is logged and recorded in the
/// returned [`BatchReport`]; the remaining files are still converted. When two inputs
/// derive the same output name, the first one wins and the others are recorded as
/// failures.
///
/// # Errors
///
/// Returns an error only for run-level problems: an invalid row limit, an output
/// directory that cannot be created, or an input directory that cannot be listed.
pub fn convert_all_files(config: &ConverterConfig) -> Result<BatchReport> {
    config.validate()?;
    ensure_dir(&config.processed_dir)?;

    let inputs = discover_input_files(&config.unprocessed_dir)?;
    if inputs.is_empty() {
        warn!("No .txt files found in {}", config.unprocessed_dir.display());
    }

    let mut report = BatchReport::default();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for input in inputs {
        let output = config.processed_dir.join(derive_output_name(&input.file_name));

        if let Some(first) = claimed.get(&output) {
            let error = ConvertError::OutputCollision { output, first: first.clone() };
            error!("Skipping {}: {}", input.path.display(), error);
            report.failed.push(FileFailure { input: input.path, error });
            continue;
        }
        claimed.insert(output.clone(), input.path.clone());

        match convert_file(&input.path, &output, config.row_limit) {
            Ok(summary) => report.converted.push(summary),
            Err(error) => {
                error!("{}", error);
                report.failed.push(FileFailure { input: input.path, error });
            }
        }
    }

    info!(
        "Converted {} of {} files ({} rows total)",
        report.converted.len(),
        report.file_count(),
        report.total_rows()
    );

    Ok(report)
}
