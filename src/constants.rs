//! Centralized constants for the photo-pins crate
//!
//! Geometry constants, provider endpoint details and search limits live here
//! so the bounding box calculator and the search client agree on them.

/// Geographic constants
pub mod geo {
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Radius of the search circle around a pin, in kilometers
    pub const SEARCH_DISTANCE_KM: f64 = 5.0;

    /// Global latitude bounds in radians (-90° / 90°)
    pub const MIN_LAT_RAD: f64 = -FRAC_PI_2;
    pub const MAX_LAT_RAD: f64 = FRAC_PI_2;

    /// Global longitude bounds in radians (-180° / 180°)
    pub const MIN_LON_RAD: f64 = -PI;
    pub const MAX_LON_RAD: f64 = PI;
}

/// Photo provider endpoint
pub mod api {
    /// Flickr REST endpoint
    pub const ENDPOINT: &str = "https://api.flickr.com/services/rest";
}

/// Query parameter names
pub mod params {
    pub const METHOD: &str = "method";
    pub const API_KEY: &str = "api_key";
    pub const EXTRAS: &str = "extras";
    pub const FORMAT: &str = "format";
    pub const NO_JSON_CALLBACK: &str = "nojsoncallback";
    pub const SAFE_SEARCH: &str = "safe_search";
    pub const BOUNDING_BOX: &str = "bbox";
    pub const PER_PAGE: &str = "per_page";
    pub const PAGE: &str = "page";
}

/// Query parameter values
pub mod values {
    pub const SEARCH_METHOD: &str = "flickr.photos.search";
    pub const RESPONSE_FORMAT: &str = "json";
    pub const DISABLE_JSON_CALLBACK: &str = "1";
    pub const MEDIUM_URL: &str = "url_m";
    pub const SAFE_SEARCH_ON: &str = "1";
}

/// Response keys and sentinels
pub mod response {
    pub const STATUS: &str = "stat";
    pub const OK_STATUS: &str = "ok";
    pub const CODE: &str = "code";
    pub const MESSAGE: &str = "message";
    pub const PHOTO: &str = "photo";
    pub const PAGE: &str = "page";
    pub const PAGES: &str = "pages";
    pub const TOTAL: &str = "total";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const MEDIUM_URL: &str = "url_m";
    pub const PHOTOS: &str = "photos";
}

/// Paging limits
pub mod search {
    /// Photos requested per page
    pub const PER_PAGE: u32 = 30;

    /// The provider stops returning useful results past ~1000 items
    pub const MAX_PAGES: u32 = 33;
}
