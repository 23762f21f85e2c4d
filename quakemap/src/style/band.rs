//! Static depth band table used by the legend.

use serde::Serialize;

use super::DepthColor;

/// A half-open depth range (in km) and the colour drawn for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthBand {
    /// Lower bound in km.
    pub min: f64,
    /// Whether `min` itself belongs to the band.
    pub min_inclusive: bool,
    /// Exclusive upper bound; `None` for the open-ended deepest band.
    pub max: Option<f64>,
    pub color: DepthColor,
}

/// The six legend bands, shallowest first.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand {
        min: -10.0,
        min_inclusive: false,
        max: Some(10.0),
        color: DepthColor::Green,
    },
    DepthBand {
        min: 10.0,
        min_inclusive: true,
        max: Some(30.0),
        color: DepthColor::LightGreen,
    },
    DepthBand {
        min: 30.0,
        min_inclusive: true,
        max: Some(50.0),
        color: DepthColor::LightSalmon,
    },
    DepthBand {
        min: 50.0,
        min_inclusive: true,
        max: Some(70.0),
        color: DepthColor::Orange,
    },
    DepthBand {
        min: 70.0,
        min_inclusive: true,
        max: Some(90.0),
        color: DepthColor::Tomato,
    },
    DepthBand {
        min: 90.0,
        min_inclusive: true,
        max: None,
        color: DepthColor::Red,
    },
];

impl DepthBand {
    /// Returns true if `depth` falls inside this band.
    pub fn contains(&self, depth: f64) -> bool {
        let above_min = if self.min_inclusive {
            depth >= self.min
        } else {
            depth > self.min
        };
        above_min && self.max.map_or(true, |max| depth < max)
    }

    /// Human-readable range label, e.g. `10–30` or `90+`.
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}–{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }
}
