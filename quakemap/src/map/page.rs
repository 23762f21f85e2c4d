//! Static HTML page around a [`MapView`].
//!
//! The page loads Leaflet from unpkg, embeds the serialized view as JSON, and
//! runs a small fixed bootstrap script that turns it into Leaflet layers.
//! Popup times are filled in by that script from each marker's raw timestamp,
//! so they show in the viewer's time zone.

use html_escape::encode_text;
use serde::Serialize;

use super::error::RenderError;
use super::view::MapView;

/// Leaflet release the page loads.
pub const LEAFLET_VERSION: &str = "1.9.4";

/// Page-level metadata that is not part of the map itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    /// Document `<title>`.
    pub title: String,
    /// Source feed URL, shown as a comment for provenance.
    pub feed_url: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Earthquakes of the Past Week".to_string(),
            feed_url: None,
        }
    }
}

/// Renders the complete HTML document for a view.
pub fn render_html(view: &MapView, options: &PageOptions) -> Result<String, RenderError> {
    let payload = script_safe_json(view)?;
    let provenance = options
        .feed_url
        .as_deref()
        .map(|url| format!("\n<!-- feed: {} -->", url.replace("--", "&#45;&#45;")))
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>{provenance}
<link rel="stylesheet" href="https://unpkg.com/leaflet@{leaflet}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{leaflet}/dist/leaflet.js"></script>
<style>
{css}
</style>
</head>
<body>
<div id="map"></div>
<script id="map-view" type="application/json">{payload}</script>
<script>
{bootstrap}
</script>
</body>
</html>
"#,
        title = encode_text(&options.title),
        provenance = provenance,
        leaflet = LEAFLET_VERSION,
        css = PAGE_CSS,
        payload = payload,
        bootstrap = BOOTSTRAP_JS,
    ))
}

/// JSON encoding that cannot terminate the surrounding `<script>` element.
fn script_safe_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}

const PAGE_CSS: &str = r#"html, body, #map { height: 100%; width: 100%; margin: 0; padding: 0; }
.legend { background: white; padding: 6px 10px; border-radius: 5px; box-shadow: 0 0 15px rgba(0, 0, 0, 0.2); font: 12px/1.4 sans-serif; }
.legend h4 { margin: 0 0 6px; font-size: 13px; }
.legend ul { list-style: none; margin: 0; padding: 0; }
.legend li { display: flex; align-items: center; margin: 2px 0; }
.legend .swatch { display: inline-block; width: 18px; height: 12px; margin-right: 6px; border: 1px solid #555; }"#;

const BOOTSTRAP_JS: &str = r#"(function () {
  var mapView = JSON.parse(document.getElementById('map-view').textContent);

  var bases = {};
  mapView.baseLayers.forEach(function (layer) {
    bases[layer.name] = L.tileLayer(layer.urlTemplate, { attribution: layer.attribution });
  });

  var quakes = L.layerGroup(mapView.overlay.markers.map(function (m) {
    return L.circleMarker(m.position, {
      radius: m.radius,
      fillColor: m.fillColor,
      color: m.color,
      weight: m.weight,
      opacity: m.opacity,
      fillOpacity: m.fillOpacity
    }).bindPopup(function () {
      var content = L.DomUtil.create('div');
      content.innerHTML = m.popupHtml;
      var stamp = content.querySelector('.event-time');
      if (stamp) { stamp.textContent = new Date(m.time).toString(); }
      return content;
    });
  }));
  var overlays = {};
  overlays[mapView.overlay.name] = quakes;

  var layers = [bases[mapView.view.baseLayer] || bases[mapView.baseLayers[0].name]];
  if (mapView.view.overlayVisible) { layers.push(quakes); }

  var map = L.map('map', { center: mapView.view.center, zoom: mapView.view.zoom, layers: layers });

  L.control.layers(bases, overlays, { collapsed: mapView.layerControl.collapsed }).addTo(map);

  var legend = L.control({ position: mapView.legend.position });
  legend.onAdd = function () {
    var div = L.DomUtil.create('div', 'info legend');
    var title = document.createElement('h4');
    title.textContent = mapView.legend.title;
    div.appendChild(title);
    var list = document.createElement('ul');
    mapView.legend.entries.forEach(function (entry) {
      var item = document.createElement('li');
      var swatch = document.createElement('span');
      swatch.className = 'swatch';
      swatch.style.backgroundColor = entry.color;
      item.appendChild(swatch);
      item.appendChild(document.createTextNode(entry.label + ' km'));
      list.appendChild(item);
    });
    div.appendChild(list);
    return div;
  };
  legend.addTo(map);
})();"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Coordinates, EventRecord};
    use crate::map::MapComposer;
    use crate::marker::{FeatureAdapter, FeatureStyler, EVENT_TIME_CLASS};

    fn view_with_place(place: &str) -> MapView {
        let record = EventRecord {
            id: None,
            place: place.to_string(),
            time: 0,
            detail_url: String::new(),
            title: "t".to_string(),
            magnitude: 1.0,
            coordinates: Coordinates {
                longitude: 0.0,
                latitude: 0.0,
                depth: 0.0,
            },
        };
        let marker = FeatureAdapter::new().to_marker(&record);
        MapComposer::new().build_view(vec![marker])
    }

    fn embedded_json(html: &str) -> &str {
        let start = html.find(r#"type="application/json">"#).unwrap() + 24;
        let end = start + html[start..].find("</script>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_page_structure() {
        let html = render_html(&view_with_place("Somewhere"), &PageOptions::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div id="map"></div>"#));
        assert!(html.contains("leaflet@1.9.4/dist/leaflet.js"));
        assert!(html.contains("<title>Earthquakes of the Past Week</title>"));
    }

    #[test]
    fn test_embedded_view_round_trips() {
        let view = view_with_place("Somewhere");
        let html = render_html(&view, &PageOptions::default()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(embedded_json(&html)).unwrap();
        assert_eq!(parsed, serde_json::to_value(&view).unwrap());
        assert_eq!(parsed["view"]["center"], serde_json::json!([37.09, -95.71]));
        assert_eq!(parsed["view"]["baseLayer"], "Street Map");
        assert_eq!(parsed["legend"]["position"], "bottomright");
    }

    #[test]
    fn test_payload_cannot_close_script_tag() {
        let view = view_with_place("</script><script>alert(1)</script>");
        let html = render_html(&view, &PageOptions::default()).unwrap();

        let json = embedded_json(&html);
        assert!(!json.contains('<'));
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        let popup = parsed["overlay"]["markers"][0]["popupHtml"].as_str().unwrap();
        assert!(popup.contains("&lt;/script&gt;"));
    }

    #[test]
    fn test_popup_time_rendered_in_browser() {
        let html = render_html(&view_with_place("x"), &PageOptions::default()).unwrap();
        assert!(BOOTSTRAP_JS.contains(&format!("querySelector('.{}')", EVENT_TIME_CLASS)));
        assert!(html.contains("new Date(m.time).toString()"));

        let parsed: serde_json::Value = serde_json::from_str(embedded_json(&html)).unwrap();
        assert_eq!(parsed["overlay"]["markers"][0]["time"], 0);
    }

    #[test]
    fn test_title_is_escaped() {
        let options = PageOptions {
            title: "Quakes <b>& more</b>".to_string(),
            ..PageOptions::default()
        };
        let html = render_html(&view_with_place("x"), &options).unwrap();
        assert!(html.contains("<title>Quakes &lt;b&gt;&amp; more&lt;/b&gt;</title>"));
    }

    #[test]
    fn test_provenance_comment() {
        let options = PageOptions {
            feed_url: Some("https://example.com/all_week.geojson".to_string()),
            ..PageOptions::default()
        };
        let html = render_html(&view_with_place("x"), &options).unwrap();
        assert!(html.contains("<!-- feed: https://example.com/all_week.geojson -->"));
    }
}
