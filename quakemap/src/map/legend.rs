//! Depth legend control.

use serde::Serialize;

use crate::style::{DepthBand, DepthColor, DEPTH_BANDS};

/// Heading shown above the legend swatches.
pub const LEGEND_TITLE: &str = "Earthquake Depth Color";

/// Corner of the map a control is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One swatch in the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: DepthColor,
}

impl From<&DepthBand> for LegendEntry {
    fn from(band: &DepthBand) -> Self {
        Self {
            label: band.label(),
            color: band.color,
        }
    }
}

/// The depth legend.
///
/// Always lists the full fixed palette; it does not depend on the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: ControlPosition,
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            position: ControlPosition::BottomRight,
            title: LEGEND_TITLE,
            entries: DEPTH_BANDS.iter().map(LegendEntry::from).collect(),
        }
    }
}
