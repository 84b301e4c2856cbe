//! Bbox command handler
//!
//! Prints the bounding box a search would use, in the provider's
//! `minLon,minLat,maxLon,maxLat` form.

use crate::config::Config;
use crate::coord::{compute_bounding_box_with_distance, Coordinates};
use crate::error::{Error, Result};
use clap::Args;

/// Bbox command arguments
#[derive(Args)]
pub struct BboxArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Search radius in kilometers (defaults to search.radius_km)
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,
}

/// Run the bbox command
pub fn run(args: BboxArgs) -> Result<()> {
    let center = Coordinates::new(args.lat, args.lng);
    center.validate()?;

    let radius = match args.radius {
        Some(radius) => radius,
        None => Config::load()?.search.radius_km,
    };
    if !(radius.is_finite() && radius > 0.0) {
        return Err(Error::Config(format!("Radius must be positive: {}", radius)));
    }

    let bbox = compute_bounding_box_with_distance(center.lat, center.lng, radius);
    println!("{}", bbox);
    if bbox.crosses_antimeridian() {
        eprintln!("note: box crosses the antimeridian (min_lon > max_lon)");
    }

    Ok(())
}
