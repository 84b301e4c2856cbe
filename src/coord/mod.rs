//! Coordinates and search-area geometry
//!
//! This module handles:
//! - The `Coordinates` value type supplied by callers (a dropped pin)
//! - Great-circle bounding boxes around a pin
//! - Haversine distance between two coordinates

pub mod bbox;
pub mod distance;

pub use bbox::{compute_bounding_box, compute_bounding_box_with_distance, BoundingBox};
pub use distance::haversine_distance_km;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    ///
    /// The geometry and search code never call this; out-of-range input there
    /// yields a degenerate box instead of an error. Front ends that accept
    /// free-form input (the CLI) check first.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }

    /// Bounding box of the default search circle around these coordinates
    pub fn search_box(&self) -> BoundingBox {
        compute_bounding_box(self.lat, self.lng)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}
