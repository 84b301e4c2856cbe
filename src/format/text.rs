//! Human-readable text output formatter

use crate::error::Result;
use crate::flickr::SearchOutcome;
use crate::format::OutputFormatter;

/// Text formatter - outputs a human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, outcome: &SearchOutcome) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Photos near ({})\n", outcome.center));
        output.push_str(&format!(
            "Page {} of {} ({} photos)\n\n",
            outcome.page,
            outcome.total_pages,
            outcome.photos.len()
        ));

        for photo in &outcome.photos {
            match &photo.title {
                Some(title) => output.push_str(&format!("  {:<12} {}\n", photo.id, title)),
                None => output.push_str(&format!("  {:<12} (untitled)\n", photo.id)),
            }
            output.push_str(&format!("  {:<12} {}\n", "", photo.image_url));
        }

        Ok(output)
    }
}
