//! extract-code-blocks library
//!
//! This library extracts fenced code blocks of one target language (Rust by
//! default) from markdown documents, keeping each block's starting line,
//! fence attributes and raw content for documentation-validation tooling.
//! The primary interface is the `extract-code-blocks` binary, but the library
//! can be used directly.
//!
//! ## Public API
//!
//! - [`Scanner`] - Lazy line-by-line fence scanner yielding [`Block`]s
//! - [`extract_blocks`] - Collect all blocks from a string
//! - [`Document`] - File loading with the binary's error messages
//! - [`TargetLanguage`] - Fence tags that open a block
//! - [`ExtractConfig`] - TOML configuration
//! - [`write_block`] / [`write_blocks`] - Output serialization in an [`OutputFormat`]
//!
//! ## Example
//!
//! ```
//! use extract_code_blocks::{extract_blocks, TargetLanguage};
//!
//! let markdown = "# Intro\n\n```rust,ignore\nlet x = 1;\n```\n";
//! let blocks = extract_blocks(markdown, &TargetLanguage::default());
//!
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].start_line, 3);
//! assert_eq!(blocks[0].attributes, "ignore");
//! assert_eq!(blocks[0].content, "let x = 1;");
//! ```

mod config;
mod document;
mod language;
mod output;
mod scanner;

pub use config::ExtractConfig;
pub use document::Document;
pub use language::{TargetLanguage, DEFAULT_LANGUAGE, FENCE};
pub use output::{write_block, write_blocks, OutputFormat};
pub use scanner::{extract_blocks, Block, Scanner};
