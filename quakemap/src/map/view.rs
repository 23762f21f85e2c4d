//! Map view composition.

use serde::Serialize;
use tracing::debug;

use super::layers::{BaseLayer, TileLayer};
use super::legend::Legend;
use crate::marker::MarkerDescriptor;

/// Initial map centre: the continental US centroid.
pub const DEFAULT_CENTER: (f64, f64) = (37.09, -95.71);

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 4;

/// Name of the earthquake overlay in the layer control.
pub const OVERLAY_NAME: &str = "Earthquakes";

/// Camera and layer visibility when the page opens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// `(latitude, longitude)`
    pub center: (f64, f64),
    pub zoom: u8,
    pub base_layer: BaseLayer,
    pub overlay_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            base_layer: BaseLayer::Street,
            overlay_visible: true,
        }
    }
}

impl ViewState {
    pub fn with_center(mut self, lat: f64, lon: f64) -> Self {
        self.center = (lat, lon);
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_base_layer(mut self, base_layer: BaseLayer) -> Self {
        self.base_layer = base_layer;
        self
    }
}

/// The earthquake overlay: every marker drawn as a circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub name: &'static str,
    pub markers: Vec<MarkerDescriptor>,
}

/// Layer switcher. Base layers are radio buttons, overlays are checkboxes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
    pub base_layers: Vec<&'static str>,
    pub overlays: Vec<&'static str>,
}

/// Everything the browser needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub view: ViewState,
    pub base_layers: Vec<TileLayer>,
    pub overlay: Overlay,
    pub layer_control: LayerControl,
    pub legend: Legend,
}

impl MapView {
    /// Number of point markers on the overlay.
    pub fn marker_count(&self) -> usize {
        self.overlay.markers.len()
    }

    /// The tile layer that is active when the page opens.
    ///
    /// Falls back to the first layer when the selected one is missing, and
    /// returns `None` only when there are no base layers at all.
    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        let name = self.view.base_layer.display_name();
        self.base_layers
            .iter()
            .find(|layer| layer.name == name)
            .or_else(|| self.base_layers.first())
    }
}

/// Assembles [`MapView`]s from markers.
#[derive(Debug, Clone, Default)]
pub struct MapComposer {
    initial_view: ViewState,
}

impl MapComposer {
    /// Composer with the default initial view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer with a custom initial view.
    pub fn with_view(initial_view: ViewState) -> Self {
        Self { initial_view }
    }

    /// The view every composed map starts from.
    pub fn initial_view(&self) -> &ViewState {
        &self.initial_view
    }

    /// Builds the map. Takes ownership of the markers; one circle per marker.
    pub fn build_view(&self, markers: Vec<MarkerDescriptor>) -> MapView {
        debug!(markers = markers.len(), base = %self.initial_view.base_layer, "Composing map view");

        let bases = BaseLayer::all();
        MapView {
            view: self.initial_view,
            base_layers: bases.iter().map(BaseLayer::tile_layer).collect(),
            overlay: Overlay {
                name: OVERLAY_NAME,
                markers,
            },
            layer_control: LayerControl {
                collapsed: false,
                base_layers: bases.iter().map(BaseLayer::display_name).collect(),
                overlays: vec![OVERLAY_NAME],
            },
            legend: Legend::default(),
        }
    }
}
