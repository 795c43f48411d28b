use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub const INPUT_EXTENSION: &str = ".txt";
pub const OUTPUT_EXTENSION: &str = ".json";
pub const OUTPUT_PREFIX: &str = "output_";

/// Derives the output file name for a dump file name
///
/// Swaps the `.txt` suffix for `.json`, drops everything up to and including the first
/// underscore, then prepends `output_`. A name without an underscore is kept whole.
///
/// # Examples
///
/// ```
/// use dump_converter::derive_output_name;
///
/// assert_eq!(derive_output_name("raw_dump1.txt"), "output_dump1.json");
/// assert_eq!(derive_output_name("ol_dump_2024_01.txt"), "output_dump_2024_01.json");
/// assert_eq!(derive_output_name("items.txt"), "output_items.json");
/// ```
pub fn derive_output_name(input_name: &str) -> String {
    let renamed = match input_name.strip_suffix(INPUT_EXTENSION) {
        Some(stem) => format!("{}{}", stem, OUTPUT_EXTENSION),
        None => input_name.to_string(),
    };

    let tail = match renamed.split_once('_') {
        Some((_, rest)) => rest,
        None => renamed.as_str(),
    };

    format!("{}{}", OUTPUT_PREFIX, tail)
}

/// True for names the batch run picks up
pub fn is_dump_file_name(name: &str) -> bool {
    name.ends_with(INPUT_EXTENSION)
}

/// Creates `dir` and any missing parents; an existing directory is fine
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|source| ConvertError::CreateDir { path: dir.to_path_buf(), source })
}

/// Sibling path used while an output file is being written
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
