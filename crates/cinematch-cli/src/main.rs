//! cinematch - find items similar to one you liked
//!
//! Usage:
//!   cinematch "Inception"                 # Top 5 similar titles
//!   cinematch "Inception" -n 10           # Top 10
//!   cinematch "Aladin"                    # Unknown title: suggestions
//!   cinematch --catalog films.json        # Interactive: one query per stdin line
//!   cinematch "Avatar" --json             # Machine-readable output

use clap::Parser;
use cinematch::catalog::{sample, CatalogEntry};
use cinematch::{EngineConfig, EngineHandle};
use colored::Colorize;
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod error;
mod output;

use error::{CliError, Result};

/// cinematch - content-based recommendations
///
/// Looks a title up in the catalog and lists the most similar items, or
/// suggests close titles when it is not found.
#[derive(Parser, Debug)]
#[command(name = "cinematch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Title to look up; when omitted, queries are read one per line from stdin
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Number of similar titles to show
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Catalog file: JSON array of {"title", "features"} objects (default: built-in films)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Engine configuration file (JSON); flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minimum near-spelling score in [0, 1]
    #[arg(long, value_name = "SCORE")]
    near_cutoff: Option<f64>,

    /// Near-spelling candidates kept
    #[arg(long, value_name = "N")]
    near_limit: Option<usize>,

    /// Maximum suggestions shown for unknown titles
    #[arg(long, value_name = "N")]
    max_suggestions: Option<usize>,

    /// Output one JSON object per query
    #[arg(long)]
    json: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            e.exit_code()
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::builder().with_default_directive(level.into()).from_env_lossy())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let entries = match &cli.catalog {
        Some(path) => read_json::<Vec<CatalogEntry>>(path)?,
        None => sample::films(),
    };

    let engine = EngineHandle::initialize_with(config, entries)?;
    tracing::info!(items = engine.catalog().len(), "catalog loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = cli.count as usize;

    match &cli.query {
        Some(query) => answer(&mut out, &engine, query, count, cli.json),
        None => {
            for line in std::io::stdin().lock().lines() {
                answer(&mut out, &engine, &line?, count, cli.json)?;
                out.flush()?;
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => read_json::<EngineConfig>(path)?,
        None => EngineConfig::default(),
    };

    if let Some(cutoff) = cli.near_cutoff {
        config = config.with_near_match_cutoff(cutoff);
    }
    if let Some(limit) = cli.near_limit {
        config = config.with_near_match_limit(limit);
    }
    if let Some(max) = cli.max_suggestions {
        config = config.with_max_suggestions(max);
    }

    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn answer(
    out: &mut impl Write,
    engine: &EngineHandle,
    query: &str,
    count: usize,
    json: bool,
) -> Result<()> {
    let result = match engine.recommend(query, count) {
        Ok(result) => result,
        Err(e) if e.is_caller_error() => {
            // Blank input: nothing to do
            tracing::debug!("skipping blank query");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        output::json(out, query, &result, count)
    } else {
        output::human(out, query, &result, count)?;
        Ok(())
    }
}
