//! The fixed marker palette.

use std::fmt;

use serde::{Serialize, Serializer};

/// One of the colours a depth can map to.
///
/// Serializes as its CSS colour keyword so the browser can use it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthColor {
    Green,
    LightGreen,
    LightSalmon,
    Orange,
    Tomato,
    Red,
    Black,
}

impl DepthColor {
    /// CSS colour keyword for this palette entry.
    pub fn as_css(&self) -> &'static str {
        match self {
            DepthColor::Green => "green",
            DepthColor::LightGreen => "lightgreen",
            DepthColor::LightSalmon => "lightsalmon",
            DepthColor::Orange => "orange",
            DepthColor::Tomato => "tomato",
            DepthColor::Red => "red",
            DepthColor::Black => "black",
        }
    }
}

impl fmt::Display for DepthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl Serialize for DepthColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_keywords() {
        assert_eq!(DepthColor::LightGreen.as_css(), "lightgreen");
        assert_eq!(DepthColor::LightSalmon.to_string(), "lightsalmon");
    }

    #[test]
    fn test_serializes_as_keyword() {
        let json = serde_json::to_string(&DepthColor::Tomato).unwrap();
        assert_eq!(json, "\"tomato\"");
    }
}
