//! QuakeMap - live earthquake maps from the USGS feed
//!
//! This library fetches a window of seismic events from the USGS GeoJSON
//! summary feed, derives a circle marker for each event (radius from
//! magnitude, colour from depth), and composes an interactive Leaflet map
//! page with three base layers, a toggleable earthquake overlay, and a
//! depth legend.
//!
//! # Modules
//!
//! - [`style`]: magnitude → radius and depth → colour
//! - [`feed`]: one-shot feed loading and record validation
//! - [`marker`]: record → marker descriptor and popup markup
//! - [`map`]: layers, controls, legend and the static HTML page
//! - [`app`]: the pipeline tying the stages together
//! - [`config`], [`logging`]: ambient setup for the CLI
//!
//! # Example
//!
//! ```ignore
//! use quakemap::app::QuakeMap;
//! use quakemap::feed::{FeedEndpoint, FeedLoader, ReqwestClient};
//! use quakemap::map::MapComposer;
//!
//! let loader = FeedLoader::new(ReqwestClient::new()?, FeedEndpoint::default());
//! let rendered = QuakeMap::new(MapComposer::new()).build(&loader).await?;
//! rendered.write_html("quakemap.html".as_ref())?;
//! ```

pub mod app;
pub mod config;
pub mod feed;
pub mod logging;
pub mod map;
pub mod marker;
pub mod style;

/// Library version, as published in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
