//! Pipeline error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::feed::FeedError;
use crate::logging::LoggingError;
use crate::map::RenderError;

/// Any failure along the load → adapt → compose → write path.
#[derive(Debug, Error)]
pub enum QuakeMapError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}
