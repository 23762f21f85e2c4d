//! Validated earthquake records.

use serde::Serialize;

use super::error::FeedError;
use super::model::Feature;

/// Hypocentre position. Depth is in kilometres and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
    pub depth: f64,
}

/// One seismic event, as read from the feed.
///
/// Records are immutable once loaded; the loader hands them out in feed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// USGS event id, when the feed carries one.
    pub id: Option<String>,
    pub place: String,
    /// Origin time in epoch milliseconds.
    pub time: i64,
    pub detail_url: String,
    pub title: String,
    /// Magnitude; zero and negative values are valid.
    pub magnitude: f64,
    pub coordinates: Coordinates,
}

impl EventRecord {
    /// Validates a wire feature.
    ///
    /// `index` is the feature's position in the collection and is only used
    /// for error reporting. Missing text fields become empty strings; missing
    /// numbers are an error since no style can be derived without them.
    pub fn try_from_feature(index: usize, feature: Feature) -> Result<Self, FeedError> {
        let missing = |field| FeedError::MalformedFeature { index, field };

        let props = feature.properties;
        let magnitude = props.mag.ok_or_else(|| missing("mag"))?;
        let time = props.time.ok_or_else(|| missing("time"))?;

        let coords = feature
            .geometry
            .map(|g| g.coordinates)
            .unwrap_or_default();
        let coord = |i: usize, field| coords.get(i).copied().flatten().ok_or_else(|| missing(field));
        let coordinates = Coordinates {
            longitude: coord(0, "longitude")?,
            latitude: coord(1, "latitude")?,
            depth: coord(2, "depth")?,
        };

        Ok(Self {
            id: feature.id,
            place: props.place.unwrap_or_default(),
            time,
            detail_url: props.detail.unwrap_or_default(),
            title: props.title.unwrap_or_default(),
            magnitude,
            coordinates,
        })
    }

    /// Map position as `(latitude, longitude)`.
    pub fn position(&self) -> (f64, f64) {
        (self.coordinates.latitude, self.coordinates.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeatureCollection;

    fn feature(json: &str) -> Feature {
        let doc = format!(r#"{{"features": [{}]}}"#, json);
        FeatureCollection::from_slice(doc.as_bytes())
            .unwrap()
            .features
            .remove(0)
    }

    #[test]
    fn test_valid_feature() {
        let record = EventRecord::try_from_feature(
            0,
            feature(
                r#"{"id": "us7000abcd",
                    "properties": {"mag": 4.6, "place": "Fiji region", "time": 1700000000000,
                                   "detail": "https://example.com/d", "title": "M 4.6 - Fiji region"},
                    "geometry": {"coordinates": [178.2, -17.9, 560.3]}}"#,
            ),
        )
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("us7000abcd"));
        assert_eq!(record.magnitude, 4.6);
        assert_eq!(record.coordinates.depth, 560.3);
        assert_eq!(record.position(), (-17.9, 178.2));
        assert_eq!(record.detail_url, "https://example.com/d");
    }

    #[test]
    fn test_missing_magnitude_is_rejected() {
        let result = EventRecord::try_from_feature(
            3,
            feature(r#"{"properties": {"mag": null, "time": 1}, "geometry": {"coordinates": [1, 2, 3]}}"#),
        );
        match result {
            Err(FeedError::MalformedFeature { index, field }) => {
                assert_eq!(index, 3);
                assert_eq!(field, "mag");
            }
            other => panic!("Expected MalformedFeature, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_depth_is_rejected() {
        let result = EventRecord::try_from_feature(
            0,
            feature(r#"{"properties": {"mag": 1.0, "time": 1}, "geometry": {"coordinates": [1, 2]}}"#),
        );
        assert!(matches!(
            result,
            Err(FeedError::MalformedFeature { field: "depth", .. })
        ));
    }

    #[test]
    fn test_missing_geometry_is_rejected() {
        let result = EventRecord::try_from_feature(0, feature(r#"{"properties": {"mag": 1.0, "time": 1}}"#));
        assert!(matches!(
            result,
            Err(FeedError::MalformedFeature { field: "longitude", .. })
        ));
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let record = EventRecord::try_from_feature(
            0,
            feature(r#"{"properties": {"mag": 0, "time": 5}, "geometry": {"coordinates": [0, 0, 0]}}"#),
        )
        .unwrap();
        assert!(record.place.is_empty());
        assert!(record.title.is_empty());
        assert!(record.id.is_none());
    }
}
