//! Per-band statistics for a loaded feed.

use crate::feed::EventRecord;
use crate::style::{color_for_depth, DepthColor, DEPTH_BANDS};

/// Number of events drawn in one colour.
#[derive(Debug, Clone, PartialEq)]
pub struct BandCount {
    pub label: String,
    pub color: DepthColor,
    pub count: usize,
}

/// Aggregate view of a feed, used for terminal output.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSummary {
    pub total: usize,
    /// One entry per legend band plus a trailing "below -10" bucket.
    pub bands: Vec<BandCount>,
    pub min_magnitude: Option<f64>,
    pub max_magnitude: Option<f64>,
    /// The largest event, by magnitude.
    pub strongest: Option<String>,
}

impl FeedSummary {
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut bands: Vec<BandCount> = DEPTH_BANDS
            .iter()
            .map(|band| BandCount {
                label: band.label(),
                color: band.color,
                count: 0,
            })
            .collect();
        bands.push(BandCount {
            label: "≤-10".to_string(),
            color: DepthColor::Black,
            count: 0,
        });

        for record in records {
            let color = color_for_depth(record.coordinates.depth);
            if let Some(entry) = bands.iter_mut().find(|b| b.color == color) {
                entry.count += 1;
            }
        }

        let strongest = records
            .iter()
            .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude));

        Self {
            total: records.len(),
            bands,
            min_magnitude: records.iter().map(|r| r.magnitude).min_by(f64::total_cmp),
            max_magnitude: strongest.map(|r| r.magnitude),
            strongest: strongest.map(|r| r.title.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Coordinates;

    fn record(title: &str, magnitude: f64, depth: f64) -> EventRecord {
        EventRecord {
            id: None,
            place: String::new(),
            time: 0,
            detail_url: String::new(),
            title: title.to_string(),
            magnitude,
            coordinates: Coordinates {
                longitude: 0.0,
                latitude: 0.0,
                depth,
            },
        }
    }

    #[test]
    fn test_counts_per_band() {
        let records = vec![
            record("a", 1.0, 5.0),
            record("b", 2.0, 8.0),
            record("c", 6.1, 95.0),
            record("d", -0.5, -20.0),
            record("e", 0.0, 10.0),
        ];
        let summary = FeedSummary::from_records(&records);

        let counts: Vec<usize> = summary.bands.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 1, 0, 0, 0, 1, 1]);
        assert_eq!(summary.total, 5);
        assert_eq!(counts.iter().sum::<usize>(), summary.total);
        assert_eq!(summary.min_magnitude, Some(-0.5));
        assert_eq!(summary.max_magnitude, Some(6.1));
        assert_eq!(summary.strongest.as_deref(), Some("c"));
    }

    #[test]
    fn test_empty_feed() {
        let summary = FeedSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.bands.len(), 7);
        assert!(summary.max_magnitude.is_none());
        assert!(summary.strongest.is_none());
    }
}
