//! One-shot feed loader.

use std::path::Path;

use tracing::{debug, info};

use super::endpoint::FeedEndpoint;
use super::error::FeedError;
use super::http::HttpClient;
use super::model::FeatureCollection;
use super::record::EventRecord;

/// Loads the earthquake feed and returns its records to the caller.
///
/// The loader owns its HTTP client and endpoint; it keeps no state between
/// loads and never retries.
pub struct FeedLoader<C: HttpClient> {
    http_client: C,
    endpoint: FeedEndpoint,
}

impl<C: HttpClient> FeedLoader<C> {
    /// Creates a loader for the given endpoint.
    pub fn new(http_client: C, endpoint: FeedEndpoint) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    /// The endpoint this loader fetches.
    pub fn endpoint(&self) -> &FeedEndpoint {
        &self.endpoint
    }

    /// Fetches and validates the feed.
    ///
    /// Records come back in feed order, one per feature.
    pub async fn load(&self) -> Result<Vec<EventRecord>, FeedError> {
        let url = self.endpoint.url();
        info!(url = %url, "Fetching earthquake feed");

        let body = self.http_client.get(&url).await?;
        debug!(bytes = body.len(), "Feed downloaded");

        let records = parse_records(&body)?;
        info!(count = records.len(), "Feed loaded");
        Ok(records)
    }
}

/// Loads a previously saved GeoJSON document from disk.
pub async fn load_file(path: &Path) -> Result<Vec<EventRecord>, FeedError> {
    info!(path = %path.display(), "Reading earthquake feed from file");
    let body = tokio::fs::read(path)
        .await
        .map_err(|e| FeedError::ReadFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    parse_records(&body)
}

/// Parses a GeoJSON body into validated records, preserving order.
pub fn parse_records(body: &[u8]) -> Result<Vec<EventRecord>, FeedError> {
    let collection =
        FeatureCollection::from_slice(body).map_err(|e| FeedError::Parse(e.to_string()))?;

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| EventRecord::try_from_feature(index, feature))
        .collect()
}
