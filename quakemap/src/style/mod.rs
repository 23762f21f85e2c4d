//! Visual style derivation for earthquake markers.
//!
//! Two pure functions drive every marker on the map:
//!
//! - [`radius_for_magnitude`] scales the circle with the event magnitude
//! - [`color_for_depth`] buckets the hypocentre depth into a fixed palette
//!
//! The same palette is published as [`DEPTH_BANDS`] so the legend can be
//! drawn without looking at the data.
//!
//! # Depth Bands
//!
//! ```text
//!   depth (km)   -10      10      30      50      70      90
//!   ────────────┼────────┼───────┼───────┼───────┼───────┼──────────►
//!     black     │ green  │lightgr│lsalmon│orange │tomato │   red
//! ```
//!
//! Bands are half-open with the boundary belonging to the upper band, except
//! for the green band whose lower edge (-10) is exclusive.

mod band;
mod color;

pub use band::{DepthBand, DEPTH_BANDS};
pub use color::DepthColor;

use serde::Serialize;

/// Radius used for events with a negative magnitude.
pub const NEGATIVE_MAGNITUDE_RADIUS: f64 = 2.0;

/// Radius used for events with a magnitude of exactly zero.
pub const ZERO_MAGNITUDE_RADIUS: f64 = 4.0;

/// Pixels of radius per unit of positive magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 8.0;

/// Computes the marker radius (in pixels) for a magnitude.
///
/// ```
/// use quakemap::style::radius_for_magnitude;
///
/// assert_eq!(radius_for_magnitude(-1.5), 2.0);
/// assert_eq!(radius_for_magnitude(0.0), 4.0);
/// assert_eq!(radius_for_magnitude(2.0), 16.0);
/// ```
///
/// NaN matches neither signed branch and gets the zero-magnitude radius.
#[inline]
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    if magnitude < 0.0 {
        NEGATIVE_MAGNITUDE_RADIUS
    } else if magnitude > 0.0 {
        magnitude * RADIUS_PER_MAGNITUDE
    } else {
        ZERO_MAGNITUDE_RADIUS
    }
}

/// Maps a depth in kilometres onto the fixed marker palette.
///
/// The bands are checked top to bottom and the first match wins; anything at
/// or below -10 km (and NaN) ends up [`DepthColor::Black`].
#[inline]
pub fn color_for_depth(depth: f64) -> DepthColor {
    if depth > -10.0 && depth < 10.0 {
        DepthColor::Green
    } else if (10.0..30.0).contains(&depth) {
        DepthColor::LightGreen
    } else if (30.0..50.0).contains(&depth) {
        DepthColor::LightSalmon
    } else if (50.0..70.0).contains(&depth) {
        DepthColor::Orange
    } else if (70.0..90.0).contains(&depth) {
        DepthColor::Tomato
    } else if depth >= 90.0 {
        DepthColor::Red
    } else {
        DepthColor::Black
    }
}

/// Stroke and opacity settings shared by every earthquake marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Outline colour.
    pub color: DepthColor,
    /// Outline width in pixels.
    pub weight: f64,
    /// Outline opacity (0.0 - 1.0).
    pub opacity: f64,
    /// Fill opacity (0.0 - 1.0).
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: DepthColor::Black,
            weight: 1.0,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}
