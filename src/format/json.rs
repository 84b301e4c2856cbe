//! JSON output formatter

use crate::error::Result;
use crate::flickr::SearchOutcome;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the full outcome as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON outcome"
    }

    fn format(&self, outcome: &SearchOutcome) -> Result<String> {
        Ok(serde_json::to_string_pretty(outcome)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::sample_outcome;

    #[test]
    fn test_json_format() {
        let output = JsonFormatter.format(&sample_outcome()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["page"], 3);
        assert_eq!(parsed["total_pages"], 12);
        assert_eq!(parsed["photos"][0]["id"], "101");
        assert_eq!(parsed["photos"][0]["title"], "Brooklyn Bridge");
        assert!(parsed["photos"][1].get("title").is_none());
    }

    #[test]
    fn test_json_is_lossless() {
        let outcome = sample_outcome();
        let output = JsonFormatter.format(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&output).unwrap();
        assert_eq!(back, outcome);
    }
}
