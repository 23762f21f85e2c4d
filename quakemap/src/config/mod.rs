//! Configuration file support.
//!
//! Settings live in an INI file at `~/.config/quakemap/config.ini` (or the
//! platform equivalent). A missing file means "all defaults".
//!
//! ```ini
//! [feed]
//! window = all_week
//! ; url = https://example.com/custom.geojson
//! timeout = 30
//!
//! [map]
//! center_lat = 37.09
//! center_lon = -95.71
//! zoom = 4
//! base_layer = street
//!
//! [output]
//! path = quakemap.html
//!
//! [logging]
//! level = info
//! ; file = /tmp/quakemap.log
//! ```

mod error;
mod file;
mod keys;

pub use error::ConfigError;
pub use file::{
    config_dir, config_file_path, ConfigFile, FeedSettings, LoggingSettings, MapSettings,
    OutputSettings, DEFAULT_OUTPUT_PATH,
};
pub use keys::ConfigKey;
