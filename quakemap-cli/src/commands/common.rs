//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use quakemap::config::{ConfigFile, ConfigKey};
use quakemap::feed::{FeedEndpoint, FeedWindow};
use quakemap::map::{BaseLayer, ViewState};

use crate::error::CliError;

/// USGS feed selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum FeedArg {
    /// All events, past hour
    Hour,
    /// All events, past day
    Day,
    /// All events, past week
    Week,
    /// All events, past 30 days
    Month,
    /// Significant events, past week
    Significant,
    /// M4.5+ events, past week
    M45,
    /// M2.5+ events, past week
    M25,
    /// M1.0+ events, past week
    M10,
}

impl From<FeedArg> for FeedWindow {
    fn from(arg: FeedArg) -> Self {
        match arg {
            FeedArg::Hour => FeedWindow::AllHour,
            FeedArg::Day => FeedWindow::AllDay,
            FeedArg::Week => FeedWindow::AllWeek,
            FeedArg::Month => FeedWindow::AllMonth,
            FeedArg::Significant => FeedWindow::SignificantWeek,
            FeedArg::M45 => FeedWindow::M4_5Week,
            FeedArg::M25 => FeedWindow::M2_5Week,
            FeedArg::M10 => FeedWindow::M1_0Week,
        }
    }
}

/// Base layer selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum BaseLayerArg {
    Street,
    Topographic,
    Dark,
}

impl From<BaseLayerArg> for BaseLayer {
    fn from(arg: BaseLayerArg) -> Self {
        match arg {
            BaseLayerArg::Street => BaseLayer::Street,
            BaseLayerArg::Topographic => BaseLayer::Topographic,
            BaseLayerArg::Dark => BaseLayer::Dark,
        }
    }
}

/// Where to read earthquakes from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// USGS summary feed to fetch
    #[arg(long, value_enum, conflicts_with_all = ["url", "input"])]
    pub feed: Option<FeedArg>,

    /// Custom GeoJSON feed URL
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Read a saved GeoJSON file instead of fetching
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Initial map view overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct MapArgs {
    /// Base layer shown when the page opens
    #[arg(long, value_enum)]
    pub base_layer: Option<BaseLayerArg>,

    /// Initial zoom level
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Initial centre latitude
    #[arg(long, allow_hyphen_values = true)]
    pub center_lat: Option<f64>,

    /// Initial centre longitude
    #[arg(long, allow_hyphen_values = true)]
    pub center_lon: Option<f64>,
}

/// A resolved feed source.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    Remote {
        endpoint: FeedEndpoint,
        timeout_secs: u64,
    },
    File(PathBuf),
}

/// Applies a CLI override through the config key's validation.
fn apply(config: &mut ConfigFile, key: ConfigKey, value: Option<String>) -> Result<(), CliError> {
    if let Some(value) = value {
        key.set(config, &value)?;
    }
    Ok(())
}

/// Resolve the feed source from CLI args and config.
pub fn resolve_source(args: &SourceArgs, config: &ConfigFile) -> Result<FeedSource, CliError> {
    // CLI takes precedence, then config
    if let Some(path) = &args.input {
        return Ok(FeedSource::File(path.clone()));
    }

    let mut config = config.clone();
    if let Some(feed) = args.feed {
        config.feed.window = feed.into();
        config.feed.url = None;
    }
    apply(&mut config, ConfigKey::FeedUrl, args.url.clone())?;
    apply(
        &mut config,
        ConfigKey::FeedTimeout,
        args.timeout.map(|t| t.to_string()),
    )?;

    Ok(FeedSource::Remote {
        endpoint: config.endpoint(),
        timeout_secs: config.feed.timeout,
    })
}

/// Resolve the initial map view from CLI args and config.
pub fn resolve_view(args: &MapArgs, config: &ConfigFile) -> Result<ViewState, CliError> {
    let mut config = config.clone();
    if let Some(base) = args.base_layer {
        config.map.base_layer = base.into();
    }
    apply(&mut config, ConfigKey::MapZoom, args.zoom.map(|z| z.to_string()))?;
    apply(
        &mut config,
        ConfigKey::MapCenterLat,
        args.center_lat.map(|v| v.to_string()),
    )?;
    apply(
        &mut config,
        ConfigKey::MapCenterLon,
        args.center_lon.map(|v| v.to_string()),
    )?;

    Ok(config.view_state())
}
