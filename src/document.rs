use crate::language::TargetLanguage;
use crate::scanner::Scanner;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::str::Split;

/// A markdown document held in memory for scanning.
///
/// Lines are 1-indexed when reported in blocks. Line endings are normalized
/// on construction (`\r\n` and a lone `\r` become `\n`) and the text is
/// split on every `\n`, so a trailing newline yields a final empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: normalize_newlines(text.into()),
        }
    }

    /// Reads a UTF-8 markdown file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist (`File not found: <path>`)
    /// - The file cannot be read or is not valid UTF-8
    pub fn read(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::new(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                anyhow::bail!("File not found: {}", path.display())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub fn lines(&self) -> Split<'_, char> {
        self.text.split('\n')
    }

    /// Starts a lazy scan of this document for `language` blocks.
    pub fn scan<'l>(&self, language: &'l TargetLanguage) -> Scanner<'_, 'l, Split<'_, char>> {
        Scanner::new(self.lines(), language)
    }
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
