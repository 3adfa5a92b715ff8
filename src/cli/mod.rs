//! CLI adapter for folio.
//!
//! A thin clap surface over `core/`: resolves configuration, opens
//! the input and output streams, runs the pipeline, and renders the
//! finished index. The index itself always goes to the output
//! stream; diagnostics and the summary go to stderr.

pub mod output;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::core::config::{Config, RenderFormat};
use crate::core::error::{FolioError, Result};
use crate::core::pipeline::Pipeline;

/// folio - book-style word index builder
///
/// Reads a plain-text document and emits a sorted listing of every
/// word and the logical pages it occurs on, where a page is a fixed
/// number of input lines.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Build a book-style word index from plain text", long_about = None)]
pub struct Cli {
    /// File to read (defaults to stdin)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// File to write (defaults to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Number of lines of text per logical page
    #[arg(long)]
    pub lines_per_page: Option<u64>,

    /// Output format for the index
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file (or set FOLIO_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress the summary printed to stderr
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Output format for the rendered index
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Classic `word:<tab>pages` listing (default)
    Text,
    /// JSON object for scripting
    Json,
}

impl From<OutputFormat> for RenderFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => RenderFormat::Text,
            OutputFormat::Json => RenderFormat::Json,
        }
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<()> {
    // Resolve configuration: flags override the file, the file
    // overrides defaults
    let config = Config::load(cli.config.as_deref())?;
    let lines_per_page = cli
        .lines_per_page
        .unwrap_or(config.pagination.lines_per_page);
    let format = cli
        .format
        .map(RenderFormat::from)
        .unwrap_or(config.output.format);

    tracing::debug!(
        lines_per_page,
        ?format,
        input = ?cli.input,
        output = ?cli.output,
        "resolved configuration"
    );

    // Open streams; failures here are configuration errors, the
    // pipeline never starts
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                FolioError::Config(format!("Could not open input file {}: {e}", path.display()))
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let sink: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FolioError::Config(format!(
                    "Could not create output file {}: {e}",
                    path.display()
                ))
            })?;
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);

    // Consume the whole input before rendering anything
    let (index, stats) = Pipeline::new(lines_per_page).run(reader)?;

    match format {
        RenderFormat::Text => index.render_text(&mut writer)?,
        RenderFormat::Json => index.render_json(&mut writer)?,
    }
    // BufWriter drops silently on error, so flush explicitly
    writer.flush().map_err(FolioError::Write)?;

    if !cli.quiet {
        output::print_summary(&stats);
    }

    Ok(())
}
