//! USGS summary feed endpoints.
//!
//! # URL Pattern
//!
//! `https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/{window}.geojson`
//!
//! - No authentication, no query parameters, no pagination
//! - Feeds are regenerated by USGS every minute

use std::fmt;
use std::str::FromStr;

/// Base URL of the USGS summary GeoJSON feeds.
pub const USGS_SUMMARY_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// A pre-built USGS summary feed (magnitude threshold + time window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedWindow {
    AllHour,
    AllDay,
    #[default]
    AllWeek,
    AllMonth,
    SignificantWeek,
    M4_5Week,
    M2_5Week,
    M1_0Week,
}

impl FeedWindow {
    /// All known windows, in display order.
    pub fn all() -> &'static [FeedWindow] {
        &[
            FeedWindow::AllHour,
            FeedWindow::AllDay,
            FeedWindow::AllWeek,
            FeedWindow::AllMonth,
            FeedWindow::SignificantWeek,
            FeedWindow::M4_5Week,
            FeedWindow::M2_5Week,
            FeedWindow::M1_0Week,
        ]
    }

    /// The feed's file stem as published by USGS.
    pub fn slug(&self) -> &'static str {
        match self {
            FeedWindow::AllHour => "all_hour",
            FeedWindow::AllDay => "all_day",
            FeedWindow::AllWeek => "all_week",
            FeedWindow::AllMonth => "all_month",
            FeedWindow::SignificantWeek => "significant_week",
            FeedWindow::M4_5Week => "4.5_week",
            FeedWindow::M2_5Week => "2.5_week",
            FeedWindow::M1_0Week => "1.0_week",
        }
    }
}

impl fmt::Display for FeedWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FeedWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        FeedWindow::all()
            .iter()
            .copied()
            .find(|w| w.slug() == normalized)
            .ok_or_else(|| format!("unknown feed window '{}'", s))
    }
}

/// Where the feed is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEndpoint {
    /// One of the USGS summary feeds.
    Usgs(FeedWindow),
    /// Any URL serving a compatible GeoJSON document.
    Custom(String),
}

impl Default for FeedEndpoint {
    fn default() -> Self {
        FeedEndpoint::Usgs(FeedWindow::default())
    }
}

impl FeedEndpoint {
    /// Full URL for the GET request.
    pub fn url(&self) -> String {
        match self {
            FeedEndpoint::Usgs(window) => {
                format!("{}/{}.geojson", USGS_SUMMARY_BASE_URL, window.slug())
            }
            FeedEndpoint::Custom(url) => url.clone(),
        }
    }
}

impl fmt::Display for FeedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
