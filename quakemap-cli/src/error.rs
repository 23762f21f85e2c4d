//! CLI error type.

use std::fmt;

use quakemap::app::QuakeMapError;
use quakemap::config::ConfigError;
use quakemap::feed::FeedError;
use quakemap::logging::LoggingError;
use quakemap::map::RenderError;

/// Errors surfaced to the user by the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Invalid or unreadable configuration.
    Config(String),

    /// The feed could not be fetched or parsed.
    Feed(FeedError),

    /// The map page could not be written.
    Render(RenderError),

    /// Logging could not be initialised.
    Logging(LoggingError),

    /// Failed to create the Tokio runtime.
    RuntimeCreation(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 2,
            CliError::Feed(_) => 3,
            CliError::Render(_) => 4,
            CliError::Logging(_) | CliError::RuntimeCreation(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Feed(e) => write!(f, "Could not load earthquake feed: {}", e),
            CliError::Render(e) => write!(f, "Could not write map: {}", e),
            CliError::Logging(e) => write!(f, "Could not initialise logging: {}", e),
            CliError::RuntimeCreation(msg) => write!(f, "Failed to create Tokio runtime: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Feed(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Logging(e) => Some(e),
            CliError::Config(_) | CliError::RuntimeCreation(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<FeedError> for CliError {
    fn from(e: FeedError) -> Self {
        CliError::Feed(e)
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}

impl From<QuakeMapError> for CliError {
    fn from(e: QuakeMapError) -> Self {
        match e {
            QuakeMapError::Feed(e) => CliError::Feed(e),
            QuakeMapError::Render(e) => CliError::Render(e),
            QuakeMapError::Config(e) => e.into(),
            QuakeMapError::Logging(e) => CliError::Logging(e),
        }
    }
}
