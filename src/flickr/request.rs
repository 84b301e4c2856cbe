//! Search request construction

use crate::config::defaults::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE, DEFAULT_RADIUS_KM, DEFAULT_SAFE_SEARCH,
};
use crate::constants::{params, values};
use crate::coord::{compute_bounding_box_with_distance, BoundingBox, Coordinates};

/// Everything the client needs besides the transport and page source
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    /// Provider API key
    pub api_key: String,
    /// REST endpoint URL
    pub endpoint: String,
    /// Search circle radius in kilometers
    pub distance_km: f64,
    /// Photos per page
    pub per_page: u32,
    /// Highest page considered for random selection
    pub max_pages: u32,
    /// Send `safe_search=1`
    pub safe_search: bool,
}

impl SearchSettings {
    /// Default settings with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            distance_km: DEFAULT_RADIUS_KM,
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            safe_search: DEFAULT_SAFE_SEARCH,
        }
    }
}

/// One photo search query
///
/// Always carries a bounding box. `page` is only set on the follow-up request
/// for a randomly chosen page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    api_key: String,
    bbox: BoundingBox,
    per_page: u32,
    safe_search: bool,
    page: Option<u32>,
}

impl SearchRequest {
    /// Build the first-page request for a pin
    pub fn new(center: Coordinates, settings: &SearchSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            bbox: compute_bounding_box_with_distance(center.lat, center.lng, settings.distance_km),
            per_page: settings.per_page,
            safe_search: settings.safe_search,
            page: None,
        }
    }

    /// Same query, asking for a specific page
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Same query with the API key masked, for logging
    pub fn redacted(&self) -> Self {
        Self {
            api_key: "***".to_string(),
            ..self.clone()
        }
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// Query parameters in a stable order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (params::METHOD, values::SEARCH_METHOD.to_string()),
            (params::API_KEY, self.api_key.clone()),
            (params::EXTRAS, values::MEDIUM_URL.to_string()),
            (params::FORMAT, values::RESPONSE_FORMAT.to_string()),
            (params::NO_JSON_CALLBACK, values::DISABLE_JSON_CALLBACK.to_string()),
        ];
        if self.safe_search {
            pairs.push((params::SAFE_SEARCH, values::SAFE_SEARCH_ON.to_string()));
        }
        pairs.push((params::BOUNDING_BOX, self.bbox.to_string()));
        pairs.push((params::PER_PAGE, self.per_page.to_string()));
        if let Some(page) = self.page {
            pairs.push((params::PAGE, page.to_string()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    /// Full percent-encoded GET URL against `endpoint`
    pub fn to_url(&self, endpoint: &str) -> String {
        let query = self
            .query_pairs()
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", endpoint, query)
    }
}
