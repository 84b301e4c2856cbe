//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod bbox;
pub mod config;
pub mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Photos around map pins
#[derive(Parser)]
#[command(name = "photo-pins")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for photos around a coordinate
    Search(search::SearchArgs),

    /// Print the search bounding box for a coordinate
    Bbox(bbox::BboxArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Search(args) => search::run(args).await,
        Commands::Bbox(args) => bbox::run(args),
        Commands::Config(args) => config::run(args),
    }
}

/// Install a stderr subscriber; RUST_LOG wins over the verbosity flag
fn init_logging(verbose: bool) {
    let fallback = if verbose { "photo_pins=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
