use crate::language::{TargetLanguage, DEFAULT_LANGUAGE};
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for block extraction.
///
/// Loaded from an optional TOML file; command-line flags override it.
///
/// # Example
///
/// ```toml
/// language = "rust"
/// fence_markers = ["rust", "rs"]
/// format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Language whose fenced blocks are extracted
    pub language: String,

    /// Additional fence tags that also open a block for `language`
    pub fence_markers: Vec<String>,

    /// Output serialization
    pub format: OutputFormat,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            fence_markers: Vec::new(),
            format: OutputFormat::default(),
        }
    }
}

impl ExtractConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: ExtractConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that every fence tag could actually appear on an opening fence
    pub fn validate(&self) -> Result<()> {
        validate_tag(&self.language).context("Invalid language")?;
        for marker in &self.fence_markers {
            validate_tag(marker).context("Invalid fence marker")?;
        }
        Ok(())
    }

    pub fn target_language(&self) -> TargetLanguage {
        TargetLanguage::with_markers(&self.language, &self.fence_markers)
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    if tag.is_empty() {
        anyhow::bail!("fence tag cannot be empty");
    }

    // A comma starts the attributes, so the tag can never contain one
    if tag.contains(',') || tag.contains('`') {
        anyhow::bail!("fence tag contains invalid character: {:?}", tag);
    }

    if tag.chars().any(char::is_whitespace) {
        anyhow::bail!("fence tag cannot contain whitespace: {:?}", tag);
    }

    Ok(())
}
