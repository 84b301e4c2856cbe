//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants;

/// Default provider endpoint
pub const DEFAULT_ENDPOINT: &str = constants::api::ENDPOINT;

/// Default search radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = constants::geo::SEARCH_DISTANCE_KM;

/// Default photos per page
pub const DEFAULT_PER_PAGE: u32 = constants::search::PER_PAGE;

/// Default cap on the page count considered for random selection
pub const DEFAULT_MAX_PAGES: u32 = constants::search::MAX_PAGES;

/// Safe search is on unless turned off
pub const DEFAULT_SAFE_SEARCH: bool = true;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP user agent
pub const DEFAULT_USER_AGENT: &str = concat!("photo-pins/", env!("CARGO_PKG_VERSION"));

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "photo-pins";
