use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use extract_code_blocks::{write_blocks, Document, ExtractConfig, OutputFormat};
use std::io;
use std::path::PathBuf;
use std::process::exit;

/// Extract fenced code blocks of one language from a markdown file.
///
/// Each block is written to stdout as `<line>\t<attributes>\t<content>\0`.
#[derive(Debug, Parser)]
#[command(name = "extract-code-blocks", version, about)]
struct Cli {
    /// Markdown file to scan
    #[arg(value_name = "markdown-file")]
    file: PathBuf,

    /// Language tag to extract (default: rust)
    #[arg(long, value_name = "NAME")]
    lang: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

pub fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            log::debug!("{}", e);
            eprintln!("Usage: extract-code-blocks [OPTIONS] <markdown-file>");
            exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ExtractConfig::load(path)?,
        None => ExtractConfig::default(),
    };
    if let Some(lang) = cli.lang {
        config.language = lang;
        config.validate()?;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    log::debug!("Using configuration: {:?}", config);

    let language = config.target_language();
    let document = Document::read(&cli.file)?;
    log::debug!("Scanning {} for {} blocks", cli.file.display(), language.name());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = write_blocks(&mut out, document.scan(&language), config.format)?;

    log::debug!("Extracted {} block(s) from {}", count, cli.file.display());
    Ok(())
}
