//! Feed error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the earthquake feed.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    /// Transport-level failure (DNS, connect, TLS, timeout, body read).
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The body was not a GeoJSON feature collection.
    #[error("failed to parse feed: {0}")]
    Parse(String),

    /// A feature lacks a field the map needs.
    #[error("feature #{index} is missing a numeric `{field}`")]
    MalformedFeature { index: usize, field: &'static str },

    /// A saved feed file could not be read.
    #[error("failed to read {path}: {reason}")]
    ReadFile { path: PathBuf, reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),
}
