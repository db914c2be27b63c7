//! Common test utilities for integration tests
//!
//! This module contains shared test fixtures and helper functions used across
//! integration tests. These utilities are not compiled into the library.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated test fixture with automatic cleanup
///
/// Copies fixture files into a temporary directory, allowing tests to run
/// in parallel without interfering with each other.
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    /// Create an empty fixture directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Create a fixture containing a copy of `tests/fixtures/<name>`
    pub fn from_file(name: &str) -> Result<Self> {
        let fixture = Self::new()?;
        let source = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        std::fs::copy(source, fixture.path(name))?;
        Ok(fixture)
    }

    /// Write `content` to a file in the fixture directory and return its path
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Path of a file inside the fixture directory (may not exist)
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Run the extract-code-blocks binary with the given arguments
pub fn run_extractor<I, S>(args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::new(env!("CARGO_BIN_EXE_extract-code-blocks"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

/// Split NUL-terminated records into `(line, attributes, content)` triples
pub fn parse_records(stdout: &[u8]) -> Vec<(usize, String, String)> {
    let text = String::from_utf8_lossy(stdout);
    text.split_terminator('\0')
        .map(|record| {
            let mut fields = record.splitn(3, '\t');
            let line = fields
                .next()
                .and_then(|l| l.parse().ok())
                .expect("record has a line number");
            let attributes = fields.next().expect("record has attributes").to_string();
            let content = fields.next().expect("record has content").to_string();
            (line, attributes, content)
        })
        .collect()
}
