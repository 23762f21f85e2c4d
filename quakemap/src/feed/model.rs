//! GeoJSON wire model for the USGS summary feed.
//!
//! Only the fields the map consumes are declared; serde ignores the rest.
//! Everything is optional here so that a single bad feature can be reported
//! by index instead of failing the whole document parse.

use serde::Deserialize;

/// Top-level GeoJSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One earthquake feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Feature properties consumed by the popup and style functions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Origin time, epoch milliseconds.
    pub time: Option<i64>,
    /// URL of the event's detail document.
    pub detail: Option<String>,
    pub title: Option<String>,
}

/// Point geometry: `[longitude, latitude, depth_km]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<Option<f64>>,
}

impl FeatureCollection {
    /// Parses a GeoJSON document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
