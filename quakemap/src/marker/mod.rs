//! Conversion of event records into renderable markers.
//!
//! The mapping library asks two questions of every feature: how should it
//! look, and what does its popup say. [`FeatureStyler`] answers both for an
//! [`EventRecord`](crate::feed::EventRecord), and [`FeatureAdapter`] is the
//! implementation used by the map.

mod adapter;
mod popup;

pub use adapter::{FeatureAdapter, FeatureStyler, MarkerDescriptor, MarkerStyleSpec};
pub use popup::{format_event_time, popup_html, safe_href, EVENT_TIME_CLASS};
