//! Shared command setup: configuration, logging, runtime, feed loading.

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use quakemap::app::{QuakeMap, RenderedMap};
use quakemap::config::ConfigFile;
use quakemap::feed::{load_file, FeedLoader, ReqwestClient};
use quakemap::logging::{init_logging, LogGuard};
use quakemap::map::{MapComposer, ViewState};

use crate::commands::common::FeedSource;
use crate::error::CliError;

/// Owns everything a feed-loading command needs for its lifetime.
pub struct CliRunner {
    config: ConfigFile,
    runtime: tokio::runtime::Runtime,
    _log_guard: LogGuard,
}

impl CliRunner {
    /// Loads config, installs logging and builds the async runtime.
    pub fn new() -> Result<Self, CliError> {
        let config = ConfigFile::load()?;
        let log_guard = init_logging(&config.logging)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::RuntimeCreation(e.to_string()))?;

        Ok(Self {
            config,
            runtime,
            _log_guard: log_guard,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn log_startup(&self, command: &str) {
        tracing::info!(version = quakemap::VERSION, command, "QuakeMap starting");
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Loads the feed from `source` and composes the map.
    pub fn render(&self, source: &FeedSource, view: ViewState) -> Result<RenderedMap, CliError> {
        let pipeline = QuakeMap::new(MapComposer::with_view(view));

        match source {
            FeedSource::Remote {
                endpoint,
                timeout_secs,
            } => {
                let client = ReqwestClient::with_timeout(*timeout_secs)?;
                let loader = FeedLoader::new(client, endpoint.clone());

                let spinner = fetch_spinner(&endpoint.url());
                let result = self.block_on(pipeline.build(&loader));
                spinner.finish_and_clear();
                Ok(result?)
            }
            FeedSource::File(path) => {
                let records = self.block_on(load_file(path))?;
                Ok(pipeline.compose(records))
            }
        }
    }
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(format!("Fetching {}", url));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
