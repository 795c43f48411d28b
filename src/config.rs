//! Conversion settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

pub const DEFAULT_BASE_DIR: &str = "data";
pub const UNPROCESSED_DIR_NAME: &str = "unprocessed";
pub const PROCESSED_DIR_NAME: &str = "processed";

/// Maximum number of lines considered per input file
pub const DEFAULT_ROW_LIMIT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Directory scanned for `.txt` dump files
    pub unprocessed_dir: PathBuf,
    /// Directory receiving the `.json` output (created if missing)
    pub processed_dir: PathBuf,
    pub row_limit: usize,
}

impl ConverterConfig {
    /// Both directories under `base`, default row limit
    pub fn from_base_dir(base: &Path) -> Self {
        Self {
            unprocessed_dir: base.join(UNPROCESSED_DIR_NAME),
            processed_dir: base.join(PROCESSED_DIR_NAME),
            row_limit: DEFAULT_ROW_LIMIT,
        }
    }

    pub fn with_row_limit(mut self, row_limit: usize) -> Self {
        self.row_limit = row_limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.row_limit == 0 {
            return Err(ConvertError::InvalidRowLimit);
        }
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::from_base_dir(Path::new(DEFAULT_BASE_DIR))
    }
}
