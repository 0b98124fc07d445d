//! mobile-finder - Natural-language product search over a mobile phone dataset

use anyhow::Result;
use clap::{Parser, Subcommand};
use mobile_finder::commands::{DashboardCommand, SearchCommand, StatsCommand};
use mobile_finder::config::{Config, OutputFormat};
use mobile_finder::dataset::{source_for, Dataset};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mobile-finder",
    version,
    about = "Natural-language search over mobile phone listings",
    long_about = "Ask for phones in plain words (\"samsung under 20000\", \"best phone with 4.5 rating\") or view per-brand seller dashboards."
)]
struct Cli {
    /// Dataset CSV file path or http(s) URL
    #[arg(short, long, global = true, env = "MOBILE_FINDER_DATASET")]
    dataset: Option<String>,

    /// Proxy URL for remote datasets (e.g., socks5://host:port)
    #[arg(long, global = true, env = "MOBILE_FINDER_PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format [default: table]
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Number of results kept for "best" queries
    #[arg(long, global = true, env = "MOBILE_FINDER_BEST_LIMIT")]
    best_limit: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products with a free-text prompt
    #[command(alias = "s")]
    Search {
        /// Prompt, e.g. "samsung under 20000"
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },

    /// Show the seller dashboard for a brand
    #[command(alias = "d")]
    Dashboard {
        /// Brand name (any case)
        brand: String,
    },

    /// Show whole-dataset statistics
    Stats,

    /// List brands with their listing counts
    Brands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(limit) = cli.best_limit {
        config.best_limit = limit;
    }

    let source = source_for(&config.dataset, &config)?;
    let dataset = Dataset::load(source.as_ref()).await?;

    let output = match cli.command {
        Commands::Search { prompt } => SearchCommand::new(&config).execute(&dataset, &prompt.join(" ")),
        Commands::Dashboard { brand } => DashboardCommand::new(&config).execute(&dataset, &brand),
        Commands::Stats => StatsCommand::new(&config).execute(&dataset),
        Commands::Brands => StatsCommand::new(&config).brands(&dataset),
    };

    println!("{}", output);

    Ok(())
}
