//! Photo search around a pin
//!
//! `PhotoSearchClient` turns a coordinate into a bounding-box search against
//! the Flickr REST API and returns the photos of one result page.
//!
//! ## Protocol
//! 1. Search the pin's bounding box (first page, no `page` parameter).
//! 2. Clamp the reported page count to `max_pages`.
//! 3. With a single page, return it.
//! 4. Otherwise pick a page uniformly at random. Page 1 reuses the first
//!    response; any other page costs exactly one more request.
//!
//! At most two requests are made per search and they are never concurrent.
//! The client holds no mutable state, so one client can run any number of
//! searches in parallel.

pub mod request;
pub mod response;


pub use request::{SearchRequest, SearchSettings};
pub use response::{parse_page, PhotoDescriptor, SearchResponsePage};

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::random::{PageRandom, ThreadRandom};
use crate::transport::Transport;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Photos from one search plus where they came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Pin that was searched
    pub center: Coordinates,
    /// Page the photos were taken from
    pub page: u32,
    /// Page count after clamping
    pub total_pages: u32,
    /// Photos in provider order
    pub photos: Vec<PhotoDescriptor>,
}

/// Paginated photo search client
///
/// Generic over the transport and the page source so both can be swapped out
/// in tests.
pub struct PhotoSearchClient<T, R = ThreadRandom> {
    transport: T,
    random: R,
    settings: SearchSettings,
}

impl<T: Transport> PhotoSearchClient<T, ThreadRandom> {
    /// Create a client that picks pages with the thread RNG
    pub fn new(transport: T, settings: SearchSettings) -> Self {
        Self::with_random(transport, ThreadRandom::new(), settings)
    }
}

impl<T: Transport, R: PageRandom> PhotoSearchClient<T, R> {
    /// Create a client with an explicit page source
    pub fn with_random(transport: T, random: R, settings: SearchSettings) -> Self {
        Self {
            transport,
            random,
            settings,
        }
    }

    /// Search for photos around `center`
    pub async fn search(&self, center: Coordinates) -> Result<Vec<PhotoDescriptor>> {
        Ok(self.search_with_outcome(center).await?.photos)
    }

    /// Search for photos around `center`, reporting the page used
    pub async fn search_with_outcome(&self, center: Coordinates) -> Result<SearchOutcome> {
        let request = SearchRequest::new(center, &self.settings);
        debug!(%center, bbox = %request.bbox(), "searching photos");

        let first = self.fetch(&request).await?;
        let total_pages = first.total_pages.clamp(1, self.settings.max_pages.max(1));

        if total_pages == 1 {
            debug!(photos = first.photos.len(), "single page of results");
            return Ok(SearchOutcome {
                center,
                page: 1,
                total_pages,
                photos: first.photos,
            });
        }

        let page = self.random.page(total_pages);
        debug!(
            page,
            total_pages,
            reported_pages = first.total_pages,
            source = self.random.name(),
            "picked result page"
        );

        if page == 1 {
            return Ok(SearchOutcome {
                center,
                page,
                total_pages,
                photos: first.photos,
            });
        }

        let chosen = self.fetch(&request.with_page(page)).await?;
        debug!(page, photos = chosen.photos.len(), "fetched chosen page");

        Ok(SearchOutcome {
            center,
            page,
            total_pages,
            photos: chosen.photos,
        })
    }

    /// One round trip: send, check status and body, parse
    async fn fetch(&self, request: &SearchRequest) -> Result<SearchResponsePage> {
        debug!(
            url = %request.redacted().to_url(&self.settings.endpoint),
            "sending search request"
        );

        let response = self
            .transport
            .get(&self.settings.endpoint, &request.query_pairs())
            .await?;

        if !response.is_success() {
            return Err(Error::Transport(format!(
                "Request returned invalid status code: {}",
                response.status
            )));
        }

        let body = response
            .body
            .filter(|b| !b.is_empty())
            .ok_or_else(|| Error::Transport("No data returned".to_string()))?;

        parse_page(&body)
    }
}
