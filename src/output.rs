use crate::scanner::Block;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// How extracted blocks are written to the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<start_line>\t<attributes>\t<content>\0` per block.
    ///
    /// Content is not escaped and may contain newlines and tabs, so the NUL
    /// byte is the only reliable record delimiter.
    #[default]
    Records,
    /// One JSON object per line with `start_line`, `attributes` and `content`.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Records => write!(f, "records"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Writes one block in `format` and flushes, so consumers see each record
/// as soon as it is extracted.
pub fn write_block<W: Write>(out: &mut W, block: &Block, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Records => write!(
            out,
            "{}\t{}\t{}\0",
            block.start_line, block.attributes, block.content
        )?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, block).context("Failed to serialize block")?;
            out.write_all(b"\n")?;
        }
    }

    out.flush().context("Failed to write output")?;
    Ok(())
}

/// Writes every block from `blocks`, returning how many were written.
pub fn write_blocks<W, I>(out: &mut W, blocks: I, format: OutputFormat) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Block>,
{
    let mut count = 0;
    for block in blocks {
        write_block(out, &block, format)
            .with_context(|| format!("Failed to write block at line {}", block.start_line))?;
        count += 1;
    }
    Ok(count)
}
