//! Earthquake feed access.
//!
//! This module fetches the USGS GeoJSON summary feed and turns each feature
//! into a validated [`EventRecord`].
//!
//! # Data Flow
//!
//! ```text
//! FeedEndpoint ──► HttpClient::get ──► FeatureCollection ──► Vec<EventRecord>
//!                  (one request)       (serde wire model)    (validated, feed order)
//! ```
//!
//! There is exactly one request per load. Failures are returned to the caller
//! as [`FeedError`]; nothing is retried.

mod endpoint;
mod error;
mod http;
mod loader;
mod model;
mod record;

pub use endpoint::{FeedEndpoint, FeedWindow, USGS_SUMMARY_BASE_URL};
pub use error::FeedError;
pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use loader::{load_file, parse_records, FeedLoader};
pub use model::{Feature, FeatureCollection, Geometry, Properties};
pub use record::{Coordinates, EventRecord};

#[cfg(test)]
pub use http::tests::MockHttpClient;
