use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// origin or destination of an analysis as received from the caller.
///
/// the engine never resolves a location, it only forwards whichever
/// representation it received and renders it for the route id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum LocationRef {
    /// a place name, geocoded by the calling layer
    Named(String),
    /// a WGS84 coordinate pair
    Coordinate { lat: f64, lon: f64 },
}

impl LocationRef {
    /// the (lat, lon) pair when this location is a coordinate.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match self {
            LocationRef::Named(_) => None,
            LocationRef::Coordinate { lat, lon } => Some((*lat, *lon)),
        }
    }
}

impl Display for LocationRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationRef::Named(name) => write!(f, "{name}"),
            LocationRef::Coordinate { lat, lon } => write!(f, "{lat},{lon}"),
        }
    }
}
