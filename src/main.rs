//! CLI entry point for leetstats

use clap::Parser;
use leetstats::{Config, ProfileScraper};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

#[derive(Parser)]
#[command(name = "leetstats")]
#[command(about = "Fetch public LeetCode profile statistics into a CSV file")]
#[command(version)]
struct Cli {
    /// Usernames to fetch
    #[arg(required = true)]
    usernames: Vec<String>,

    /// Output CSV path
    #[arg(short, long, default_value = "leetcode_profiles.csv")]
    output: PathBuf,

    /// Maximum concurrent fetches
    #[arg(short, long, default_value_t = 5)]
    concurrency: usize,

    /// GraphQL endpoint to query
    #[arg(long, default_value = "https://leetcode.com/graphql/")]
    endpoint: Url,

    /// Per-request timeout in seconds (relies on the transport when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = Config {
        endpoint: cli.endpoint,
        max_concurrent_fetches: cli.concurrency,
        request_timeout: cli.timeout_secs.map(Duration::from_secs),
        output_path: cli.output.clone(),
    };

    let scraper = match ProfileScraper::new(config) {
        Ok(scraper) => scraper,
        Err(e) => {
            tracing::error!(error = %e, "failed to set up scraper");
            std::process::exit(1);
        }
    };

    match scraper.run_to_configured_output(&cli.usernames).await {
        Ok(records) => {
            tracing::info!(
                requested = cli.usernames.len(),
                written = records.len(),
                output = %cli.output.display(),
                "batch complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "batch failed");
            std::process::exit(1);
        }
    }
}
