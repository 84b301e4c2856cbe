//! Search response parsing
//!
//! Example success body:
//! `{"photos": {"page": 1, "pages": 12, "perpage": 30, "total": "351",
//!   "photo": [{"id": "5237", "title": "...", "url_m": "https://..."}]}, "stat": "ok"}`
//!
//! Example failure body:
//! `{"stat": "fail", "code": 100, "message": "Invalid API Key (Key has invalid format)"}`

use crate::constants::response::{
    CODE, ID, MEDIUM_URL, MESSAGE, OK_STATUS, PAGE, PAGES, PHOTO, PHOTOS, STATUS, TITLE, TOTAL,
};
use crate::error::{ApiError, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A photo found near a pin
///
/// This is all the search hands back; downloading and storing the image is up
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDescriptor {
    /// Provider photo id
    pub id: String,
    /// Medium-size image URL
    pub image_url: String,
    /// Photo title, when the provider sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One parsed page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponsePage {
    /// Page number reported by the provider
    pub page: Option<u32>,
    /// Total page count reported by the provider (unclamped)
    pub total_pages: u32,
    /// Total matching photos reported by the provider
    pub total: Option<u64>,
    /// Usable photos, in response order
    pub photos: Vec<PhotoDescriptor>,
}

/// Counts arrive as numbers or numeric strings depending on the field
fn count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Error codes are signed and may also be sent as strings
fn code(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Pull `{id, url_m, title}` out of one entry; `None` if id or url is missing
fn descriptor(entry: &Value) -> Option<PhotoDescriptor> {
    let id = entry.get(ID)?.as_str()?;
    let image_url = entry.get(MEDIUM_URL)?.as_str()?;
    let title = entry
        .get(TITLE)
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Some(PhotoDescriptor {
        id: id.to_string(),
        image_url: image_url.to_string(),
        title,
    })
}

/// Parse one response body
///
/// # Errors
/// * `Error::Parse` - body is not JSON
/// * `ApiError::Provider` - `stat` is missing or not "ok", or an "ok"
///   response has no `photos` object
/// * `ApiError::NoResults` - the photo array is empty
pub fn parse_page(body: &[u8]) -> Result<SearchResponsePage> {
    let raw: Value = serde_json::from_slice(body)
        .map_err(|e| Error::Parse(format!("Could not parse data as JSON: {}", e)))?;

    let stat = raw.get(STATUS).and_then(Value::as_str);
    if stat != Some(OK_STATUS) {
        let message = raw
            .get(MESSAGE)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| match stat {
                Some(stat) => format!("status '{}'", stat),
                None => format!("response has no '{}' status", STATUS),
            });

        return Err(ApiError::Provider {
            code: code(raw.get(CODE)).unwrap_or_default(),
            message,
        }
        .into());
    }

    let photos = raw.get(PHOTOS).filter(|p| p.is_object()).ok_or_else(|| {
        Error::from(ApiError::Provider {
            code: 0,
            message: format!("response has no '{}' object", PHOTOS),
        })
    })?;

    let entries = photos
        .get(PHOTO)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if entries.is_empty() {
        return Err(ApiError::NoResults.into());
    }

    let total_pages = count(photos.get(PAGES))
        .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
        .unwrap_or(1);

    Ok(SearchResponsePage {
        page: count(photos.get(PAGE)).and_then(|p| u32::try_from(p).ok()),
        total_pages,
        total: count(photos.get(TOTAL)),
        photos: entries.iter().filter_map(descriptor).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    #[test]
    fn test_parse_success() {
        let page = parse_page(&body(json!({
            "stat": "ok",
            "photos": {
                "page": 1,
                "pages": 4,
                "perpage": 30,
                "total": "97",
                "photo": [
                    {"id": "1", "title": "Harbour", "url_m": "https://farm1/1_m.jpg"},
                    {"id": "2", "title": "", "url_m": "https://farm1/2_m.jpg"}
                ]
            }
        })))
        .unwrap();

        assert_eq!(page.page, Some(1));
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total, Some(97));
        assert_eq!(page.photos.len(), 2);
        assert_eq!(page.photos[0].id, "1");
        assert_eq!(page.photos[0].image_url, "https://farm1/1_m.jpg");
        assert_eq!(page.photos[0].title.as_deref(), Some("Harbour"));
        assert_eq!(page.photos[1].title, None);
    }

    #[test]
    fn test_pages_as_string() {
        let page = parse_page(&body(json!({
            "stat": "ok",
            "photos": {"pages": "12", "photo": [{"id": "1", "url_m": "u"}]}
        })))
        .unwrap();
        assert_eq!(page.total_pages, 12);
    }

    #[test]
    fn test_missing_pages_defaults_to_one() {
        let page = parse_page(&body(json!({
            "stat": "ok",
            "photos": {"photo": [{"id": "1", "url_m": "u"}]}
        })))
        .unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, None);
    }

    #[test]
    fn test_incomplete_entries_are_skipped() {
        let page = parse_page(&body(json!({
            "stat": "ok",
            "photos": {
                "pages": 1,
                "photo": [
                    {"id": "1", "url_m": "a"},
                    {"id": "2"},
                    {"url_m": "c"},
                    {"id": 4, "url_m": "d"},
                    "garbage",
                    {"id": "5", "url_m": "e"}
                ]
            }
        })))
        .unwrap();

        let ids: Vec<&str> = page.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_all_entries_incomplete_is_empty_not_error() {
        let page = parse_page(&body(json!({
            "stat": "ok",
            "photos": {"pages": 1, "photo": [{"id": "1"}]}
        })))
        .unwrap();
        assert!(page.photos.is_empty());
    }

    #[test]
    fn test_empty_photo_array_is_no_results() {
        let err = parse_page(&body(json!({
            "stat": "ok",
            "photos": {"page": 1, "pages": 0, "total": "0", "photo": []}
        })))
        .unwrap_err();
        assert!(err.is_no_results());
    }

    #[test]
    fn test_fail_status() {
        let err = parse_page(&body(json!({
            "stat": "fail",
            "code": 100,
            "message": "Invalid API Key (Key has invalid format)"
        })))
        .unwrap_err();

        match err {
            Error::Api(ApiError::Provider { code, message }) => {
                assert_eq!(code, 100);
                assert!(message.contains("Invalid API Key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fail_status_without_message() {
        let err = parse_page(&body(json!({"stat": "weird"}))).unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Provider { code: 0, ref message }) if message.contains("weird")
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_page(b"<html>nope</html>"), Err(Error::Parse(_))));
        assert!(matches!(parse_page(b"{\"stat\": \"ok\""), Err(Error::Parse(_))));
        assert!(matches!(parse_page(b""), Err(Error::Parse(_))));
    }

    #[test]
    fn test_missing_stat_is_provider_error() {
        let err = parse_page(&body(json!({
            "photos": {"pages": 1, "photo": [{"id": "1", "url_m": "u"}]}
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Provider { code: 0, ref message }) if message.contains("stat")
        ));

        let err = parse_page(&body(json!({"photos": {}}))).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Provider { .. })));

        let err = parse_page(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Provider { .. })));
    }

    #[test]
    fn test_non_string_stat_is_provider_error() {
        let err = parse_page(&body(json!({"stat": 0}))).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Provider { code: 0, .. })));

        let err = parse_page(&body(json!({"stat": true, "code": 105}))).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Provider { code: 105, .. })));
    }

    #[test]
    fn test_string_code_on_failure() {
        let err = parse_page(&body(json!({
            "stat": "fail",
            "code": "100",
            "message": "bad key"
        })))
        .unwrap_err();

        match err {
            Error::Api(ApiError::Provider { code, message }) => {
                assert_eq!(code, 100);
                assert_eq!(message, "bad key");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse_page(&body(json!({"stat": "fail", "code": "n/a"}))).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Provider { code: 0, .. })));
    }

    #[test]
    fn test_missing_photos_object() {
        let err = parse_page(&body(json!({"stat": "ok"}))).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Provider { .. })));
        assert!(!err.is_no_results());

        let err = parse_page(&body(json!({"stat": "ok", "photos": []}))).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Provider { .. })));
    }
}
