//! photo-pins: photos around map pins
//!
//! A library and CLI tool for finding photos near a coordinate using the
//! Flickr photo search API.
//!
//! ## Features
//!
//! - Great-circle bounding box around a search radius, correct near the
//!   poles and across the antimeridian
//! - Paginated search that samples a random result page per pin
//! - Injectable HTTP transport and page randomness
//! - CLI with TOML configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use photo_pins::config::HttpConfig;
//! use photo_pins::flickr::{PhotoSearchClient, SearchSettings};
//! use photo_pins::transport::ReqwestTransport;
//! use photo_pins::Coordinates;
//!
//! # async fn example() -> photo_pins::Result<()> {
//! let transport = ReqwestTransport::new(&HttpConfig::default())?;
//! let client = PhotoSearchClient::new(transport, SearchSettings::new("YOUR_API_KEY"));
//!
//! let photos = client.search(Coordinates::new(40.7128, -74.0060)).await?;
//! for photo in &photos {
//!     println!("{} {}", photo.id, photo.image_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The bounding box alone needs no I/O:
//!
//! ```
//! use photo_pins::coord::compute_bounding_box;
//!
//! let bbox = compute_bounding_box(0.0, 0.0);
//! assert!((bbox.max_lat - 0.04497).abs() < 1e-4);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod flickr;
pub mod format;
pub mod random;
pub mod transport;

// Re-export commonly used types
pub use config::Config;
pub use coord::{compute_bounding_box, BoundingBox, Coordinates};
pub use error::{ApiError, Error, Result};
pub use flickr::{PhotoDescriptor, PhotoSearchClient, SearchOutcome, SearchSettings};
pub use random::PageRandom;
pub use transport::{Transport, TransportResponse};
