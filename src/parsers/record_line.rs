use serde_json::Value;

use crate::error::LineError;
use crate::models::Record;

/// Fewest tab-separated fields a dump line can have
pub const MIN_FIELDS: usize = 5;

/// Parse one dump line into a [`Record`]
///
/// The line is trimmed of surrounding whitespace (including tabs and the line terminator)
/// and split on `\t`. Fields 0-3 are copied verbatim; field 4 must be JSON. Anything
/// past field 4 is ignored.
pub fn parse_record_line(line: &str) -> Result<Record, LineError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();

    let [record_type, key, revision, created, metadata, ..] = fields.as_slice() else {
        return Err(LineError::Malformed { fields: fields.len() });
    };

    let metadata: Value = serde_json::from_str(metadata)?;

    Ok(Record {
        record_type: record_type.to_string(),
        key: key.to_string(),
        revision: revision.to_string(),
        created: created.to_string(),
        metadata,
    })
}
