//! Image URL list formatter

use crate::error::Result;
use crate::flickr::SearchOutcome;
use crate::format::OutputFormatter;

/// One image URL per line, for piping into a downloader
pub struct UrlFormatter;

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Image URLs, one per line"
    }

    fn format(&self, outcome: &SearchOutcome) -> Result<String> {
        Ok(outcome
            .photos
            .iter()
            .map(|p| p.image_url.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
