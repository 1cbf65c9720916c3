use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

/// A rectangular map region: northeast and southwest corners.
/// Callers may assume `north_east.lat >= south_west.lat` for any bounds
/// produced by the map; longitude wraparound is not handled.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct MapBounds {
    pub north_east: LatLong,
    pub south_west: LatLong,
}

/// Greenery score as returned by the analysis service. The service is free
/// to send a number or a string; we display it verbatim either way.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{}", n),
            Score::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A suggested park site within the analyzed snapshot.
///
/// `location_on_image` is a coarse position token (one of nine image
/// regions, e.g. "top-left", "center", "bottom-right"), not a pixel
/// coordinate; the results page maps it onto a CSS positioning class.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub reason: String,
    pub location_on_image: String,
}

/// Report returned by the analysis service for one snapshot.
///
/// `status` is an open enumeration: the documented values are
/// "Underserved", "Adequate" and "Well-Served", but anything else must
/// still render (with neutral styling). `recommendations` only accompanies
/// an underserved verdict and is omitted from the payload otherwise.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub status: String,
    pub greenery_score: Score,
    pub justification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

pub const STATUS_UNDERSERVED: &str = "Underserved";
pub const STATUS_ADEQUATE: &str = "Adequate";
pub const STATUS_WELL_SERVED: &str = "Well-Served";

impl AnalysisResult {
    pub fn is_underserved(&self) -> bool {
        self.status == STATUS_UNDERSERVED
    }
}
