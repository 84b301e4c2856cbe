//! Search command handler
//!
//! Runs one photo search around a coordinate and prints the result.

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::flickr::PhotoSearchClient;
use crate::format::{available_formats, get_formatter};
use crate::random::page_random;
use crate::transport::ReqwestTransport;
use clap::Args;
use tracing::info;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// API key (overrides api.key from the config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Search radius in kilometers
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Seed for reproducible page selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;

    let center = Coordinates::new(args.lat, args.lng);
    center.validate()?;

    let mut settings = config.search_settings(args.api_key.as_deref());
    if let Some(radius) = args.radius {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::Config(format!("Radius must be positive: {}", radius)));
        }
        settings.distance_km = radius;
    }
    if settings.api_key.is_empty() {
        return Err(Error::Config(
            "No API key configured. Use --api-key or `photo-pins config api.key <KEY>`"
                .to_string(),
        ));
    }

    let format = args.format.unwrap_or_else(|| "text".to_string());
    let formatter = get_formatter(&format).ok_or_else(|| {
        let names: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format: {} (available: {})",
            format,
            names.join(", ")
        ))
    })?;

    let transport = ReqwestTransport::new(&config.http)?;
    let client = PhotoSearchClient::with_random(transport, page_random(args.seed), settings);

    let outcome = client.search_with_outcome(center).await?;
    info!(
        photos = outcome.photos.len(),
        page = outcome.page,
        total_pages = outcome.total_pages,
        "search complete"
    );

    let output = formatter.format(&outcome)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
