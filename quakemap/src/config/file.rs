//! The INI-backed configuration file.

use std::path::{Path, PathBuf};

use ini::Ini;

use super::error::ConfigError;
use super::keys::ConfigKey;
use crate::feed::{FeedEndpoint, FeedWindow, DEFAULT_TIMEOUT_SECS};
use crate::map::{BaseLayer, ViewState, DEFAULT_CENTER, DEFAULT_ZOOM};

/// Default page written by `render`.
pub const DEFAULT_OUTPUT_PATH: &str = "quakemap.html";

/// Directory holding `config.ini`.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quakemap")
}

/// Full path of the configuration file.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.ini")
}

/// `[feed]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    pub window: FeedWindow,
    /// Overrides `window` when set.
    pub url: Option<String>,
    pub timeout: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            window: FeedWindow::default(),
            url: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[map]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub base_layer: BaseLayer,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: DEFAULT_CENTER.0,
            center_lon: DEFAULT_CENTER.1,
            zoom: DEFAULT_ZOOM,
            base_layer: BaseLayer::default(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Complete configuration with every value resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub feed: FeedSettings,
    pub map: MapSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Loads the configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Loads the configuration from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config = Self::default();
        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            let value = key.get(self);
            if !value.is_empty() {
                ini.with_section(Some(key.section()))
                    .set(key.key_name(), value);
            }
        }
        ini.write_to_file(path).map_err(write_err)
    }

    /// Feed endpoint described by the `[feed]` section.
    pub fn endpoint(&self) -> FeedEndpoint {
        match &self.feed.url {
            Some(url) => FeedEndpoint::Custom(url.clone()),
            None => FeedEndpoint::Usgs(self.feed.window),
        }
    }

    /// Initial map view described by the `[map]` section.
    pub fn view_state(&self) -> ViewState {
        ViewState::default()
            .with_center(self.map.center_lat, self.map.center_lon)
            .with_zoom(self.map.zoom)
            .with_base_layer(self.map.base_layer)
    }
}
