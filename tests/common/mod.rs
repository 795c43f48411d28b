//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a `data/unprocessed` + `data/processed` layout inside a temp directory
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty `data/unprocessed` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("data").join("unprocessed"))
            .expect("Failed to create unprocessed dir");
        Self { temp_dir }
    }

    /// Working directory the binary should run in
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    pub fn unprocessed_dir(&self) -> PathBuf {
        self.data_dir().join("unprocessed")
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.data_dir().join("processed")
    }

    /// Add a dump file to the unprocessed directory
    pub fn with_dump(self, name: &str, content: &str) -> Self {
        self.with_dump_bytes(name, content.as_bytes())
    }

    pub fn with_dump_bytes(self, name: &str, content: &[u8]) -> Self {
        fs::write(self.unprocessed_dir().join(name), content).expect("Failed to write dump file");
        self
    }

    /// Add dump lines built programmatically
    pub fn with_dump_lines(self, name: &str, lines: &[DumpLineBuilder]) -> Self {
        let content: String = lines.iter().map(|l| format!("{}\n", l.to_line())).collect();
        self.with_dump(name, &content)
    }

    /// Read an output file from the processed directory
    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.processed_dir().join(name)).expect("Failed to read output file")
    }

    pub fn output_json(&self, name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_output(name)).expect("Output is not valid JSON")
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single tab-separated dump line
pub struct DumpLineBuilder {
    record_type: String,
    key: String,
    revision: String,
    created: String,
    metadata: String,
}

impl DumpLineBuilder {
    pub fn new() -> Self {
        Self {
            record_type: "/type/edition".to_string(),
            key: "/books/OL1M".to_string(),
            revision: "1".to_string(),
            created: "2008-04-01T03:28:50.625462".to_string(),
            metadata: r#"{"title":"Test"}"#.to_string(),
        }
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn revision(mut self, revision: &str) -> Self {
        self.revision = revision.to_string();
        self
    }

    /// Raw metadata text, not required to be valid JSON
    pub fn metadata(mut self, metadata: &str) -> Self {
        self.metadata = metadata.to_string();
        self
    }

    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.record_type, self.key, self.revision, self.created, self.metadata
        )
    }
}

impl Default for DumpLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `count` valid lines with keys `/books/OL{i}M`
pub fn valid_lines(count: usize) -> Vec<DumpLineBuilder> {
    (0..count).map(|i| DumpLineBuilder::new().key(&format!("/books/OL{}M", i))).collect()
}
