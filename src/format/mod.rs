//! Output formatters
//!
//! Provides trait-based output formatting for search results.

pub mod json;
pub mod text;
pub mod url;

use crate::error::Result;
use crate::flickr::SearchOutcome;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the search outcome
    fn format(&self, outcome: &SearchOutcome) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" | "urls" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    let formatters: [&dyn OutputFormatter; 3] =
        [&json::JsonFormatter, &text::TextFormatter, &url::UrlFormatter];

    formatters
        .iter()
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_outcome() -> SearchOutcome {
    use crate::coord::Coordinates;
    use crate::flickr::PhotoDescriptor;

    SearchOutcome {
        center: Coordinates::new(40.7128, -74.0060),
        page: 3,
        total_pages: 12,
        photos: vec![
            PhotoDescriptor {
                id: "101".to_string(),
                image_url: "https://live.staticflickr.com/1/101_m.jpg".to_string(),
                title: Some("Brooklyn Bridge".to_string()),
            },
            PhotoDescriptor {
                id: "102".to_string(),
                image_url: "https://live.staticflickr.com/1/102_m.jpg".to_string(),
                title: None,
            },
        ],
    }
}
