//! Record-to-marker adapter.

use serde::Serialize;

use super::popup::popup_html;
use crate::feed::EventRecord;
use crate::style::{color_for_depth, radius_for_magnitude, DepthColor, MarkerStyle};

/// Style of one circle marker: its data-driven radius and fill plus the
/// shared stroke settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyleSpec {
    pub radius: f64,
    pub fill_color: DepthColor,
    #[serde(flatten)]
    pub stroke: MarkerStyle,
}

/// A renderable point marker for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDescriptor {
    /// `(latitude, longitude)`
    pub position: (f64, f64),
    #[serde(flatten)]
    pub style: MarkerStyleSpec,
    pub popup_html: String,
    /// Event time in epoch milliseconds; the page renders it in the
    /// viewer's time zone.
    pub time: i64,
}

impl MarkerDescriptor {
    pub fn radius(&self) -> f64 {
        self.style.radius
    }

    pub fn fill_color(&self) -> DepthColor {
        self.style.fill_color
    }
}

/// The per-feature hooks the map layer calls back into.
pub trait FeatureStyler {
    /// Visual style for the record's marker.
    fn compute_style(&self, record: &EventRecord) -> MarkerStyleSpec;

    /// Popup markup for the record's marker.
    fn compute_popup(&self, record: &EventRecord) -> String;

    /// Builds the complete marker for a record.
    fn to_marker(&self, record: &EventRecord) -> MarkerDescriptor {
        MarkerDescriptor {
            position: record.position(),
            style: self.compute_style(record),
            popup_html: self.compute_popup(record),
            time: record.time,
        }
    }

    /// Builds one marker per record, in order.
    fn to_markers(&self, records: &[EventRecord]) -> Vec<MarkerDescriptor> {
        records.iter().map(|r| self.to_marker(r)).collect()
    }
}

/// Default [`FeatureStyler`]: magnitude drives the radius, depth drives the
/// fill colour.
#[derive(Debug, Clone, Default)]
pub struct FeatureAdapter {
    stroke: MarkerStyle,
}

impl FeatureAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureStyler for FeatureAdapter {
    fn compute_style(&self, record: &EventRecord) -> MarkerStyleSpec {
        MarkerStyleSpec {
            radius: radius_for_magnitude(record.magnitude),
            fill_color: color_for_depth(record.coordinates.depth),
            stroke: self.stroke,
        }
    }

    fn compute_popup(&self, record: &EventRecord) -> String {
        popup_html(record)
    }
}
