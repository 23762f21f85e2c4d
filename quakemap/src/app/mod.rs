//! End-to-end map pipeline.
//!
//! [`QuakeMap`] owns one instance of each stage and runs them in order:
//!
//! ```text
//! FeedLoader::load ──► FeatureAdapter::to_markers ──► MapComposer::build_view
//!   (one fetch)          (one marker per record)        (layers, controls, legend)
//! ```
//!
//! The result is handed back as an owned [`RenderedMap`]; nothing is kept in
//! shared state between runs.

mod error;
mod pipeline;
mod summary;

pub use error::QuakeMapError;
pub use pipeline::{QuakeMap, RenderedMap};
pub use summary::{BandCount, FeedSummary};
