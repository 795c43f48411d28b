//! Pretty JSON output with atomic replacement

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::{ConvertError, Result};
use crate::utils::paths::temp_path_for;

const INDENT: &[u8] = b"    ";

/// Serialize `value` as 4-space indented JSON with non-ASCII left unescaped
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `value` to `path` atomically (temp file + rename)
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value)?;

    let temp = temp_path_for(path);
    fs::write(&temp, bytes)
        .map_err(|source| ConvertError::Write { path: temp.clone(), source })?;

    if let Err(source) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(ConvertError::Write { path: path.to_path_buf(), source });
    }

    Ok(())
}
