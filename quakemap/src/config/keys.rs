//! Typed `section.key` access to configuration values.

use std::path::PathBuf;
use std::str::FromStr;

use super::error::ConfigError;
use super::file::ConfigFile;
use crate::feed::FeedWindow;
use crate::logging::parse_filter;
use crate::map::BaseLayer;

/// Highest zoom level offered by all three base layers.
const MAX_ZOOM: u8 = 17;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A known configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    FeedWindow,
    FeedUrl,
    FeedTimeout,
    MapCenterLat,
    MapCenterLon,
    MapZoom,
    MapBaseLayer,
    OutputPath,
    LoggingLevel,
    LoggingFile,
}

impl ConfigKey {
    /// Every key, grouped by section, in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::FeedWindow,
            ConfigKey::FeedUrl,
            ConfigKey::FeedTimeout,
            ConfigKey::MapCenterLat,
            ConfigKey::MapCenterLon,
            ConfigKey::MapZoom,
            ConfigKey::MapBaseLayer,
            ConfigKey::OutputPath,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingFile,
        ]
    }

    /// INI section name.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::FeedWindow | ConfigKey::FeedUrl | ConfigKey::FeedTimeout => "feed",
            ConfigKey::MapCenterLat
            | ConfigKey::MapCenterLon
            | ConfigKey::MapZoom
            | ConfigKey::MapBaseLayer => "map",
            ConfigKey::OutputPath => "output",
            ConfigKey::LoggingLevel | ConfigKey::LoggingFile => "logging",
        }
    }

    /// Key name within the section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::FeedWindow => "window",
            ConfigKey::FeedUrl => "url",
            ConfigKey::FeedTimeout => "timeout",
            ConfigKey::MapCenterLat => "center_lat",
            ConfigKey::MapCenterLon => "center_lon",
            ConfigKey::MapZoom => "zoom",
            ConfigKey::MapBaseLayer => "base_layer",
            ConfigKey::OutputPath => "path",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::LoggingFile => "file",
        }
    }

    /// Dotted name, e.g. `map.zoom`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value as a string; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::FeedWindow => config.feed.window.to_string(),
            ConfigKey::FeedUrl => config.feed.url.clone().unwrap_or_default(),
            ConfigKey::FeedTimeout => config.feed.timeout.to_string(),
            ConfigKey::MapCenterLat => config.map.center_lat.to_string(),
            ConfigKey::MapCenterLon => config.map.center_lon.to_string(),
            ConfigKey::MapZoom => config.map.zoom.to_string(),
            ConfigKey::MapBaseLayer => config.map.base_layer.to_string(),
            ConfigKey::OutputPath => config.output.path.display().to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validates `value` and stores it. An empty value clears optional keys.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason,
        };

        match self {
            ConfigKey::FeedWindow => {
                config.feed.window = value.parse::<FeedWindow>().map_err(invalid)?;
            }
            ConfigKey::FeedUrl => {
                config.feed.url = if value.is_empty() {
                    None
                } else if value.starts_with("http://") || value.starts_with("https://") {
                    Some(value.to_string())
                } else {
                    return Err(invalid("must be an http:// or https:// URL".to_string()));
                };
            }
            ConfigKey::FeedTimeout => {
                let secs = value.parse::<u64>().map_err(|e| invalid(e.to_string()))?;
                if secs == 0 {
                    return Err(invalid("must be at least 1 second".to_string()));
                }
                config.feed.timeout = secs;
            }
            ConfigKey::MapCenterLat => {
                config.map.center_lat = parse_in_range(value, -90.0, 90.0).map_err(invalid)?;
            }
            ConfigKey::MapCenterLon => {
                config.map.center_lon = parse_in_range(value, -180.0, 180.0).map_err(invalid)?;
            }
            ConfigKey::MapZoom => {
                let zoom = value.parse::<u8>().map_err(|e| invalid(e.to_string()))?;
                if zoom > MAX_ZOOM {
                    return Err(invalid(format!("must be between 0 and {}", MAX_ZOOM)));
                }
                config.map.zoom = zoom;
            }
            ConfigKey::MapBaseLayer => {
                config.map.base_layer = value.parse::<BaseLayer>().map_err(invalid)?;
            }
            ConfigKey::OutputPath => {
                if value.is_empty() {
                    return Err(invalid("output path cannot be empty".to_string()));
                }
                config.output.path = PathBuf::from(value);
            }
            ConfigKey::LoggingLevel => {
                config.logging.level = parse_log_level(value).map_err(invalid)?;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
        }
        Ok(())
    }
}

/// Accepts a plain level or a comma-separated list of filter directives,
/// e.g. `warn,quakemap=debug`. Plain levels are stored lowercase.
fn parse_log_level(value: &str) -> Result<String, String> {
    let lowered = value.to_lowercase();
    if LOG_LEVELS.contains(&lowered.as_str()) {
        return Ok(lowered);
    }

    let well_formed = !value.is_empty()
        && value.split(',').all(|directive| {
            let directive = directive.trim();
            LOG_LEVELS.contains(&directive.to_lowercase().as_str()) || directive.contains('=')
        });
    if !well_formed {
        return Err(format!(
            "expected one of {} or directives like 'warn,quakemap=debug'",
            LOG_LEVELS.join(", ")
        ));
    }

    parse_filter(value).map_err(|e| e.to_string())?;
    Ok(value.to_string())
}

fn parse_in_range(value: &str, min: f64, max: f64) -> Result<f64, String> {
    let parsed = value.parse::<f64>().map_err(|e| e.to_string())?;
    if !(min..=max).contains(&parsed) {
        return Err(format!("must be between {} and {}", min, max));
    }
    Ok(parsed)
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!("map.zoom".parse::<ConfigKey>().unwrap(), ConfigKey::MapZoom);
        assert_eq!("Feed.URL".parse::<ConfigKey>().unwrap(), ConfigKey::FeedUrl);
        assert!(matches!(
            "map.rotation".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<String> = ConfigKey::all().iter().map(ConfigKey::name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ConfigKey::all().len());
    }

    #[test]
    fn test_set_and_get() {
        let mut config = ConfigFile::default();
        ConfigKey::MapBaseLayer.set(&mut config, "topographic").unwrap();
        ConfigKey::FeedWindow.set(&mut config, "4.5_week").unwrap();
        ConfigKey::LoggingLevel.set(&mut config, "DEBUG").unwrap();

        assert_eq!(ConfigKey::MapBaseLayer.get(&config), "topographic");
        assert_eq!(ConfigKey::FeedWindow.get(&config), "4.5_week");
        assert_eq!(ConfigKey::LoggingLevel.get(&config), "debug");
    }

    #[test]
    fn test_unset_optional_keys_are_empty() {
        let config = ConfigFile::default();
        assert_eq!(ConfigKey::FeedUrl.get(&config), "");
        assert_eq!(ConfigKey::LoggingFile.get(&config), "");
    }

    #[test]
    fn test_empty_value_clears_url() {
        let mut config = ConfigFile::default();
        ConfigKey::FeedUrl
            .set(&mut config, "https://example.com/q.geojson")
            .unwrap();
        ConfigKey::FeedUrl.set(&mut config, "").unwrap();
        assert!(config.feed.url.is_none());
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigFile::default();
        assert!(ConfigKey::MapCenterLat.set(&mut config, "91").is_err());
        assert!(ConfigKey::MapCenterLon.set(&mut config, "-180.5").is_err());
        assert!(ConfigKey::MapZoom.set(&mut config, "18").is_err());
        assert!(ConfigKey::FeedTimeout.set(&mut config, "0").is_err());
        assert!(ConfigKey::FeedUrl.set(&mut config, "ftp://example.com").is_err());
        assert!(ConfigKey::LoggingLevel.set(&mut config, "loud").is_err());
        assert!(ConfigKey::OutputPath.set(&mut config, "  ").is_err());
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_logging_level_accepts_filter_directives() {
        let mut config = ConfigFile::default();
        ConfigKey::LoggingLevel
            .set(&mut config, "warn,quakemap=debug")
            .unwrap();
        assert_eq!(ConfigKey::LoggingLevel.get(&config), "warn,quakemap=debug");

        ConfigKey::LoggingLevel.set(&mut config, "quakemap=trace").unwrap();
        assert_eq!(config.logging.level, "quakemap=trace");

        assert!(ConfigKey::LoggingLevel.set(&mut config, "quakemap=loud").is_err());
        assert!(ConfigKey::LoggingLevel.set(&mut config, "info,,debug").is_err());
        assert_eq!(config.logging.level, "quakemap=trace");
    }

    #[test]
    fn test_invalid_value_message_names_key() {
        let mut config = ConfigFile::default();
        let err = ConfigKey::MapZoom.set(&mut config, "abc").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("map.zoom"));
        assert!(message.contains("abc"));
    }
}
