//! Page rendering errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the map page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The map view could not be encoded as JSON.
    #[error("failed to encode map view: {0}")]
    Encode(#[from] serde_json::Error),

    /// The page could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
