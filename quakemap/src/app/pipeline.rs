//! The load → adapt → compose pipeline.

use std::path::Path;

use tracing::info;

use super::error::QuakeMapError;
use super::summary::FeedSummary;
use crate::feed::{EventRecord, FeedLoader, HttpClient};
use crate::map::{render_html, MapComposer, MapView, PageOptions, RenderError};
use crate::marker::{FeatureAdapter, FeatureStyler};

/// A composed map together with the records it was built from.
#[derive(Debug, Clone)]
pub struct RenderedMap {
    pub records: Vec<EventRecord>,
    pub view: MapView,
    pub page: PageOptions,
}

impl RenderedMap {
    /// The full HTML document.
    pub fn html(&self) -> Result<String, RenderError> {
        render_html(&self.view, &self.page)
    }

    /// Writes the HTML document to `path`, creating parent directories.
    pub fn write_html(&self, path: &Path) -> Result<(), RenderError> {
        let html = self.html()?;
        let write_err = |source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, html).map_err(write_err)?;

        info!(path = %path.display(), markers = self.view.marker_count(), "Map page written");
        Ok(())
    }

    /// Per-band counts and magnitude extremes.
    pub fn summary(&self) -> FeedSummary {
        FeedSummary::from_records(&self.records)
    }
}

/// Runs feed records through a [`FeatureStyler`] and a [`MapComposer`].
pub struct QuakeMap<S: FeatureStyler = FeatureAdapter> {
    styler: S,
    composer: MapComposer,
    page: PageOptions,
}

impl QuakeMap<FeatureAdapter> {
    /// Pipeline with the default adapter (local time zone popups).
    pub fn new(composer: MapComposer) -> Self {
        Self::with_styler(FeatureAdapter::new(), composer)
    }
}

impl<S: FeatureStyler> QuakeMap<S> {
    /// Pipeline with a custom styler.
    pub fn with_styler(styler: S, composer: MapComposer) -> Self {
        Self {
            styler,
            composer,
            page: PageOptions::default(),
        }
    }

    /// Sets page-level metadata for rendered maps.
    pub fn with_page_options(mut self, page: PageOptions) -> Self {
        self.page = page;
        self
    }

    /// Fetches the feed once and composes the map from it.
    pub async fn build<C: HttpClient>(
        &self,
        loader: &FeedLoader<C>,
    ) -> Result<RenderedMap, QuakeMapError> {
        let records = loader.load().await?;
        let mut rendered = self.compose(records);
        rendered.page.feed_url = Some(loader.endpoint().url());
        Ok(rendered)
    }

    /// Composes the map from records that are already loaded.
    pub fn compose(&self, records: Vec<EventRecord>) -> RenderedMap {
        let markers = self.styler.to_markers(&records);
        let view = self.composer.build_view(markers);
        info!(records = records.len(), markers = view.marker_count(), "Map composed");

        RenderedMap {
            records,
            view,
            page: self.page.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedEndpoint, FeedError, MockHttpClient};
    use crate::map::BaseLayer;

    const FEED: &str = r#"{"features": [
        {"id": "x1", "properties": {"mag": 3.2, "place": "Offshore", "time": 1700000000000,
          "detail": "https://example.com/x1", "title": "M 3.2 - Offshore"},
         "geometry": {"coordinates": [-125.0, 40.3, 12.0]}},
        {"id": "x2", "properties": {"mag": 0, "place": "Inland", "time": 1700000100000,
          "detail": "https://example.com/x2", "title": "M 0.0 - Inland"},
         "geometry": {"coordinates": [-117.5, 34.0, 5.0]}},
        {"id": "x3", "properties": {"mag": -1.5, "place": "Quarry", "time": 1700000200000,
          "detail": "https://example.com/x3", "title": "M -1.5 - Quarry"},
         "geometry": {"coordinates": [-111.0, 44.5, -15.0]}}
    ]}"#;

    fn pipeline() -> QuakeMap {
        QuakeMap::with_styler(FeatureAdapter::new(), MapComposer::new())
    }

    #[tokio::test]
    async fn test_build_end_to_end() {
        let loader = FeedLoader::new(MockHttpClient::ok(FEED), FeedEndpoint::default());
        let rendered = pipeline().build(&loader).await.unwrap();

        assert_eq!(rendered.records.len(), 3);
        assert_eq!(rendered.view.marker_count(), 3);

        let radii: Vec<f64> = rendered.view.overlay.markers.iter().map(|m| m.radius()).collect();
        assert_eq!(radii, vec![3.2 * 8.0, 4.0, 2.0]);

        let colors: Vec<&str> = rendered
            .view
            .overlay
            .markers
            .iter()
            .map(|m| m.fill_color().as_css())
            .collect();
        assert_eq!(colors, vec!["lightgreen", "green", "black"]);

        assert_eq!(
            rendered.page.feed_url.as_deref(),
            Some("https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson")
        );
    }

    #[tokio::test]
    async fn test_build_propagates_feed_errors() {
        let loader = FeedLoader::new(
            MockHttpClient::err(FeedError::Status {
                url: "u".to_string(),
                status: 500,
            }),
            FeedEndpoint::default(),
        );

        let result = pipeline().build(&loader).await;
        assert!(matches!(
            result,
            Err(QuakeMapError::Feed(FeedError::Status { status: 500, .. }))
        ));
    }

    #[test]
    fn test_compose_empty_feed_still_has_layers_and_legend() {
        let rendered = pipeline().compose(Vec::new());
        assert_eq!(rendered.view.marker_count(), 0);
        assert_eq!(rendered.view.base_layers.len(), 3);
        assert_eq!(rendered.view.legend.entries.len(), 6);
        assert_eq!(rendered.view.view.base_layer, BaseLayer::Street);
    }

    #[test]
    fn test_write_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("index.html");

        let rendered = pipeline().compose(crate::feed::parse_records(FEED.as_bytes()).unwrap());
        rendered.write_html(&path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("L.circleMarker"));
        assert!(html.contains("M 3.2 - Offshore"));
    }

    #[test]
    fn test_summary() {
        let rendered = pipeline().compose(crate::feed::parse_records(FEED.as_bytes()).unwrap());
        let summary = rendered.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.max_magnitude, Some(3.2));
    }
}
