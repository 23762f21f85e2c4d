//! Popup markup for a single event.
//!
//! The event time is written as a `<span class="event-time">` holding the UTC
//! rendering. The page script replaces that text with the viewer's local time
//! when the popup opens, using the raw timestamp carried on the marker.

use chrono::{DateTime, TimeZone, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::feed::EventRecord;

/// Class of the element the page script rewrites with the viewer's local time.
pub const EVENT_TIME_CLASS: &str = "event-time";

/// Formats an epoch-millisecond timestamp in the given time zone.
///
/// Uses the layout browsers print for `Date#toString()`, e.g.
/// `Fri Oct 17 2026 14:03:22 GMT-0700`. Timestamps chrono cannot represent
/// fall back to the raw millisecond value.
pub fn format_event_time<Tz>(epoch_millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::<Utc>::from_timestamp_millis(epoch_millis) {
        Some(utc) => utc
            .with_timezone(tz)
            .format("%a %b %d %Y %H:%M:%S GMT%z")
            .to_string(),
        None => epoch_millis.to_string(),
    }
}

/// Link target for a feed-provided detail URL.
///
/// Only `http` and `https` URLs are linked; anything else becomes `#`.
pub fn safe_href(url: &str) -> &str {
    let url = url.trim();
    let scheme_ok = ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });
    if scheme_ok {
        url
    } else {
        "#"
    }
}

/// Builds the popup markup for a record.
///
/// Feed-provided text is escaped before interpolation.
pub fn popup_html(record: &EventRecord) -> String {
    format!(
        "<h3>{place}</h3><hr>\
         <p>-Time and Date: <span class=\"{time_class}\" data-time=\"{millis}\">{time}</span>\
         <br>-Details: <a href=\"{detail}\">{title}</a></p><hr>\
         <h3>-Magnitude: {mag}</h3>\
         <h3>-Depth: {depth}</h3>",
        place = encode_text(&record.place),
        time_class = EVENT_TIME_CLASS,
        millis = record.time,
        time = format_event_time(record.time, &Utc),
        detail = encode_double_quoted_attribute(safe_href(&record.detail_url)),
        title = encode_text(&record.title),
        mag = record.magnitude,
        depth = record.coordinates.depth,
    )
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::feed::Coordinates;

    fn record() -> EventRecord {
        EventRecord {
            id: None,
            place: "10 km SSW of Volcano, Hawaii".to_string(),
            time: 1_760_737_402_000,
            detail_url: "https://earthquake.usgs.gov/detail/hv1.geojson".to_string(),
            title: "M 2.2 - 10 km SSW of Volcano, Hawaii".to_string(),
            magnitude: 2.2,
            coordinates: Coordinates {
                longitude: -155.3,
                latitude: 19.3,
                depth: 31.5,
            },
        }
    }

    #[test]
    fn test_format_time_utc() {
        // 2025-10-17T21:43:22Z
        assert_eq!(
            format_event_time(1_760_737_402_000, &Utc),
            "Fri Oct 17 2025 21:43:22 GMT+0000"
        );
    }

    #[test]
    fn test_format_time_with_offset() {
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
        assert_eq!(
            format_event_time(1_760_737_402_000, &pacific),
            "Fri Oct 17 2025 14:43:22 GMT-0700"
        );
    }

    #[test]
    fn test_format_time_out_of_range() {
        assert_eq!(format_event_time(i64::MAX, &Utc), i64::MAX.to_string());
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(
            safe_href("https://earthquake.usgs.gov/x"),
            "https://earthquake.usgs.gov/x"
        );
        assert_eq!(safe_href("  HTTP://example.com "), "HTTP://example.com");
        assert_eq!(safe_href("javascript:alert(document.cookie)"), "#");
        assert_eq!(safe_href("JavaScript:alert(1)"), "#");
        assert_eq!(safe_href("data:text/html,<b>x</b>"), "#");
        assert_eq!(safe_href("//evil.example/x"), "#");
        assert_eq!(safe_href(""), "#");
    }

    #[test]
    fn test_popup_contains_all_fields() {
        let html = popup_html(&record());
        assert!(html.starts_with("<h3>10 km SSW of Volcano, Hawaii</h3><hr>"));
        assert!(html.contains(
            "-Time and Date: <span class=\"event-time\" data-time=\"1760737402000\">Fri Oct 17 2025 21:43:22 GMT+0000</span>"
        ));
        assert!(html.contains(
            "<a href=\"https://earthquake.usgs.gov/detail/hv1.geojson\">M 2.2 - 10 km SSW of Volcano, Hawaii</a>"
        ));
        assert!(html.contains("<h3>-Magnitude: 2.2</h3>"));
        assert!(html.ends_with("<h3>-Depth: 31.5</h3>"));
    }

    #[test]
    fn test_popup_escapes_feed_text() {
        let mut hostile = record();
        hostile.place = "<img src=x onerror=alert(1)>".to_string();
        hostile.title = "Tom & Jerry <b>".to_string();
        hostile.detail_url = "https://x.example/\" onclick=\"steal()".to_string();

        let html = popup_html(&hostile);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("Tom &amp; Jerry &lt;b&gt;"));
        assert!(html.contains("href=\"https://x.example/&quot; onclick=&quot;steal()\""));
    }

    #[test]
    fn test_popup_does_not_link_script_urls() {
        let mut hostile = record();
        hostile.detail_url = "javascript:alert(document.cookie)".to_string();
        hostile.title = "click me".to_string();

        let html = popup_html(&hostile);
        assert!(!html.contains("href=\"javascript:"));
        assert!(html.contains("<a href=\"#\">click me</a>"));
    }
}
