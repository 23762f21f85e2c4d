//! Map composition.
//!
//! [`MapComposer`] turns a list of markers into a [`MapView`]: three base
//! tile layers, the earthquake overlay, a layer control, and the depth legend.
//! [`render_html`] then writes the view into a static page that hands it to
//! Leaflet in the browser.
//!
//! # Architecture
//!
//! ```text
//! Vec<MarkerDescriptor> ──► MapComposer::build_view ──► MapView ──► render_html ──► index.html
//!                                  │                     (serde)      (Leaflet bootstrap)
//!                                  ├── BaseLayer × 3
//!                                  ├── Overlay "Earthquakes"
//!                                  ├── LayerControl
//!                                  └── Legend (fixed depth bands)
//! ```

mod error;
mod layers;
mod legend;
mod page;
mod view;

pub use error::RenderError;
pub use layers::{BaseLayer, TileLayer};
pub use legend::{ControlPosition, Legend, LegendEntry, LEGEND_TITLE};
pub use page::{render_html, PageOptions, LEAFLET_VERSION};
pub use view::{
    LayerControl, MapComposer, MapView, Overlay, ViewState, DEFAULT_CENTER, DEFAULT_ZOOM,
    OVERLAY_NAME,
};
