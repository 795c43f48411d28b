use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{ConvertError, Result};
use crate::utils::is_dump_file_name;

/// A dump file found in the unprocessed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// List `.txt` files directly inside `dir`, sorted by name
///
/// Subdirectories are not searched, and directories whose names end in `.txt` are
/// ignored. Names that are not valid UTF-8 are logged and skipped.
///
/// # Errors
///
/// Returns [`ConvertError::ReadDir`] if `dir` is missing or cannot be listed.
pub fn discover_input_files(dir: &Path) -> Result<Vec<InputFile>> {
    let read_dir_error = |source| ConvertError::ReadDir { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            warn!("Skipping file with non UTF-8 name: {}", path.display());
            continue;
        };
        if !is_dump_file_name(&file_name) {
            continue;
        }
        if !path.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }

        files.push(InputFile { path, file_name });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    debug!("Found {} dump files in {}", files.len(), dir.display());
    Ok(files)
}
