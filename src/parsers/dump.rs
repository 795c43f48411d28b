use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::{ConvertError, LineError, Result};
use crate::models::{ConversionResult, SkippedLine};
use crate::parsers::record_line::parse_record_line;

/// Line reader that accepts `\n`, `\r\n` and bare `\r` as terminators
struct DumpLines<R> {
    reader: R,
    pending: VecDeque<String>,
    chunk: Vec<u8>,
}

impl<R: BufRead> DumpLines<R> {
    fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new(), chunk: Vec::new() }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.pop_front() {
            return Ok(Some(line));
        }

        self.chunk.clear();
        if self.reader.read_until(b'\n', &mut self.chunk)? == 0 {
            return Ok(None);
        }

        let text = std::str::from_utf8(&self.chunk)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);

        self.pending.extend(text.split('\r').map(str::to_string));
        Ok(self.pending.pop_front())
    }

    fn has_more(&mut self) -> io::Result<bool> {
        Ok(!self.pending.is_empty() || !self.reader.fill_buf()?.is_empty())
    }
}

/// Read up to `row_limit` lines of a dump file into records
///
/// Rejected lines are logged and collected in [`ConversionResult::skipped`]; they never
/// fail the file. Lines past the limit are not parsed.
///
/// # Errors
///
/// Returns [`ConvertError::Read`] if the file cannot be opened or a line cannot be read
/// (including invalid UTF-8).
pub fn parse_dump_file(path: &Path, row_limit: usize) -> Result<ConversionResult> {
    let read_error = |source| ConvertError::Read { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(read_error)?;
    let mut lines = DumpLines::new(BufReader::new(file));
    let mut result = ConversionResult::default();

    while result.lines_read < row_limit {
        let Some(line) = lines.next_line().map_err(read_error)? else {
            break;
        };
        result.lines_read += 1;
        let line_number = result.lines_read;

        match parse_record_line(&line) {
            Ok(record) => result.records.push(record),
            Err(reason) => {
                log_skipped_line(path, line_number, &reason);
                result.skipped.push(SkippedLine { line_number, reason });
            }
        }
    }

    if result.lines_read == row_limit {
        result.truncated = lines.has_more().map_err(read_error)?;
    }

    Ok(result)
}

fn log_skipped_line(path: &Path, line_number: usize, reason: &LineError) {
    match reason {
        LineError::Malformed { .. } => {
            warn!("Skipping malformed line {} in {}", line_number, path.display());
        }
        LineError::InvalidMetadata(e) => {
            warn!("Error parsing JSON on line {} in {}: {}", line_number, path.display(), e);
        }
    }
}
