//! PubMed Paper Fetcher - Entry Point
//!
//! Searches PubMed for a query and exports papers with industry-affiliated
//! authors to CSV or stdout.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_papers::{AffiliationClassifier, Config, PaperFetcher, PubMedClient, export};

#[derive(Parser, Debug)]
#[command(name = "get-papers-list")]
#[command(about = "Fetch papers from PubMed based on a query")]
#[command(version)]
struct Cli {
    /// The query string to search PubMed (supports full PubMed query syntax)
    query: String,

    /// Filename to save the results as CSV (prints a table when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print progress messages and enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of papers to fetch
    #[arg(short = 'n', long, default_value_t = 20)]
    max_results: u32,

    /// Company keyword (repeatable); replaces the built-in keyword set
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// NCBI API key (optional, raises the E-utilities rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Contact email reported to NCBI
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Retries for transient HTTP failures
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Delay before every request, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

/// Filter used by `--debug`: this crate at debug, dependencies at warn.
const DEBUG_FILTER: &str = "warn,pubmed_papers=debug";

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.debug { DEBUG_FILTER } else { cli.log_level.as_str() };
    init_tracing(log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        query = %cli.query,
        "Starting PubMed search"
    );

    let config = Config::new(cli.api_key)
        .with_email(cli.email)
        .with_max_results(cli.max_results)
        .with_max_retries(cli.retries)
        .with_request_delay(Duration::from_millis(cli.delay_ms));

    let classifier = if cli.keywords.is_empty() {
        AffiliationClassifier::default()
    } else {
        AffiliationClassifier::new(&cli.keywords)
    };

    let client = PubMedClient::new(config)?;
    let fetcher = PaperFetcher::new(client, classifier);

    if cli.debug {
        println!("Searching PubMed for query: {}", cli.query);
    }

    let papers = fetcher.fetch_papers(&cli.query, None).await?;

    if cli.debug {
        println!("Found {} papers.", papers.len());
    }

    export::export(&papers, cli.file.as_deref())?;

    tracing::info!(papers = papers.len(), "Done");
    Ok(())
}
