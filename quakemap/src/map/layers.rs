//! Base tile layers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// The mutually exclusive map backgrounds.
///
/// Serializes as its display name, which is also its key in the layer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseLayer {
    /// OpenStreetMap standard tiles.
    #[default]
    Street,
    /// OpenTopoMap relief tiles.
    Topographic,
    /// Stadia Alidade Smooth Dark tiles.
    Dark,
}

impl BaseLayer {
    /// All base layers in control order.
    pub fn all() -> [BaseLayer; 3] {
        [BaseLayer::Street, BaseLayer::Topographic, BaseLayer::Dark]
    }

    /// Name shown in the layer control.
    pub fn display_name(&self) -> &'static str {
        match self {
            BaseLayer::Street => "Street Map",
            BaseLayer::Topographic => "Topographic Map",
            BaseLayer::Dark => "Dark Map",
        }
    }

    /// Short key used in configuration and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            BaseLayer::Street => "street",
            BaseLayer::Topographic => "topographic",
            BaseLayer::Dark => "dark",
        }
    }

    /// Leaflet URL template for the tiles.
    pub fn url_template(&self) -> &'static str {
        match self {
            BaseLayer::Street => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            BaseLayer::Topographic => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            BaseLayer::Dark => {
                "https://tiles.stadiamaps.com/tiles/alidade_smooth_dark/{z}/{x}/{y}{r}.png"
            }
        }
    }

    /// Attribution HTML required by the tile provider.
    pub fn attribution(&self) -> &'static str {
        match self {
            BaseLayer::Street => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
            BaseLayer::Topographic => {
                "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, \
                 <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; \
                 <a href=\"https://opentopomap.org\">OpenTopoMap</a> \
                 (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)"
            }
            BaseLayer::Dark => {
                "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a>, \
                 &copy; <a href=\"https://openmaptiles.org/\">OpenMapTiles</a> \
                 &copy; <a href=\"http://openstreetmap.org\">OpenStreetMap</a> contributors"
            }
        }
    }

    /// Full tile layer description for this base.
    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            name: self.display_name(),
            url_template: self.url_template(),
            attribution: self.attribution(),
        }
    }
}

impl fmt::Display for BaseLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for BaseLayer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl FromStr for BaseLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "street" => Ok(BaseLayer::Street),
            "topographic" | "topo" => Ok(BaseLayer::Topographic),
            "dark" => Ok(BaseLayer::Dark),
            _ => Err(format!(
                "unknown base layer '{}' (expected street, topographic or dark)",
                s
            )),
        }
    }
}

/// A tile layer as handed to the mapping library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_street() {
        assert_eq!(BaseLayer::default(), BaseLayer::Street);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = BaseLayer::all().iter().map(|b| b.display_name()).collect();
        assert_eq!(names, vec!["Street Map", "Topographic Map", "Dark Map"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<BaseLayer>(), Ok(BaseLayer::Dark));
        assert_eq!("topo".parse::<BaseLayer>(), Ok(BaseLayer::Topographic));
        assert!("satellite".parse::<BaseLayer>().is_err());
    }

    #[test]
    fn test_tile_layer() {
        let layer = BaseLayer::Street.tile_layer();
        assert_eq!(layer.name, "Street Map");
        assert!(layer.url_template.contains("openstreetmap.org"));
        assert!(layer.attribution.contains("OpenStreetMap"));
    }
}
