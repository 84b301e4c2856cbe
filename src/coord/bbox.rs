//! Great-circle bounding box around a search circle
//!
//! Converts a center point and a search radius into the smallest
//! latitude/longitude rectangle that fully contains the circle, following
//! Jan Philip Matuschek's "Finding Points Within a Distance of a
//! Latitude/Longitude Using Bounding Coordinates".
//!
//! Two cases exist:
//! - The circle stays clear of both poles: the longitude half-width is
//!   `asin(sin(d) / cos(lat))`, wrapped back into [-180°, 180°] when the box
//!   crosses the antimeridian.
//! - The circle contains a pole: latitude is clamped to the global bound and
//!   the box spans every longitude.

use crate::constants::geo::{
    EARTH_RADIUS_KM, MAX_LAT_RAD, MAX_LON_RAD, MIN_LAT_RAD, MIN_LON_RAD, SEARCH_DISTANCE_KM,
};
use crate::coord::Coordinates;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Rectangular search area in degrees
///
/// When the area crosses the antimeridian `min_lon` is greater than
/// `max_lon`; every other box satisfies `min_lon <= max_lon` and
/// `min_lat <= max_lat`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Whether the longitude range wraps through ±180°
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Whether a coordinate lies inside (or on the edge of) the box
    pub fn contains(&self, point: Coordinates) -> bool {
        if point.lat < self.min_lat || point.lat > self.max_lat {
            return false;
        }
        if self.crosses_antimeridian() {
            point.lng >= self.min_lon || point.lng <= self.max_lon
        } else {
            point.lng >= self.min_lon && point.lng <= self.max_lon
        }
    }
}

/// Serializes as the provider's `bbox` parameter: `minLon,minLat,maxLon,maxLat`
impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

/// Bounding box of the default 5 km search circle around `lat`/`lon`
///
/// Inputs are degrees and are not validated.
pub fn compute_bounding_box(lat: f64, lon: f64) -> BoundingBox {
    compute_bounding_box_with_distance(lat, lon, SEARCH_DISTANCE_KM)
}

/// Bounding box of a `distance_km` search circle around `lat`/`lon`
///
/// # Arguments
/// * `lat` - Center latitude in degrees
/// * `lon` - Center longitude in degrees
/// * `distance_km` - Search radius in kilometers
///
/// Never fails; deterministic for identical input. Out-of-range input gives a
/// degenerate but finite box.
pub fn compute_bounding_box_with_distance(lat: f64, lon: f64, distance_km: f64) -> BoundingBox {
    let rad_dist = distance_km / EARTH_RADIUS_KM;

    let rad_lat = lat.to_radians();
    let rad_lon = lon.to_radians();

    let mut min_box_lat = rad_lat - rad_dist;
    let mut max_box_lat = rad_lat + rad_dist;

    let min_box_lon;
    let max_box_lon;

    if min_box_lat > MIN_LAT_RAD && max_box_lat < MAX_LAT_RAD {
        let delta_lon = (rad_dist.sin() / rad_lat.cos()).asin();

        let mut lo = rad_lon - delta_lon;
        if lo < MIN_LON_RAD {
            lo += 2.0 * PI;
        }
        let mut hi = rad_lon + delta_lon;
        if hi > MAX_LON_RAD {
            hi -= 2.0 * PI;
        }

        min_box_lon = lo;
        max_box_lon = hi;
    } else {
        // A pole is inside the circle
        min_box_lat = min_box_lat.max(MIN_LAT_RAD);
        max_box_lat = max_box_lat.min(MAX_LAT_RAD);
        min_box_lon = MIN_LON_RAD;
        max_box_lon = MAX_LON_RAD;
    }

    BoundingBox {
        min_lon: min_box_lon.to_degrees(),
        min_lat: min_box_lat.to_degrees(),
        max_lon: max_box_lon.to_degrees(),
        max_lat: max_box_lat.to_degrees(),
    }
}
