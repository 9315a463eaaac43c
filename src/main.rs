use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sqltables_app::{OutputFormat, TableNameExtractor, render_report};
use sqltables_infra::{QuerySource, TracingScanObserver, load_config};

mod error;

/// Extract the table names a SQL statement refers to
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SQL text to scan (read from stdin when neither QUERY nor --file is given)
    #[arg(conflicts_with = "file")]
    query: Option<String>,

    /// Read the SQL text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format: plain or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Strip backticks and merge names that only differ in quoting
    #[arg(long)]
    unquote: bool,

    /// Print how often each name was referenced
    #[arg(long)]
    counts: bool,

    /// Config file (defaults to $SQLTABLES_CONFIG, then the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(args.config).wrap_err("failed to load configuration")?;
    let options = config.resolve(args.format, args.unquote, args.counts);

    let query = QuerySource::from_args(args.query, args.file)
        .read()
        .wrap_err("failed to read SQL input")?;

    let extractor = TableNameExtractor::with_observer(Arc::new(TracingScanObserver::new()));
    let tables = extractor.extract(&query);
    debug!(tables = tables.len(), ?options, "extraction finished");

    let report = render_report(&tables, &options).wrap_err("failed to render report")?;
    if !report.is_empty() {
        writeln!(io::stdout().lock(), "{report}")?;
    }

    Ok(())
}

/// `RUST_LOG` wins over `-v` when set. Logs go to stderr.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
