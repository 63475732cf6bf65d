use serde::{Deserialize, Serialize};

/// a candidate route as reported by the routing provider. numeric fields may
/// be missing or malformed; feature extraction clamps them rather than failing.
///
/// geometry is an ordered sequence of (lat, lon) points.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RouteCandidate {
    #[serde(default)]
    pub geometry: Vec<(f64, f64)>,
    /// travel time under current traffic conditions, in seconds
    #[serde(default)]
    pub travel_time_s: Option<f64>,
    /// free-flow travel time, in seconds
    #[serde(default)]
    pub no_traffic_s: Option<f64>,
    /// route length, in meters
    #[serde(default)]
    pub length_m: Option<f64>,
    /// traffic delay as reported by the provider, in seconds. only used
    /// when the delay cannot be derived from the two travel times.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_s: Option<f64>,
}

impl RouteCandidate {
    pub fn new(travel_time_s: f64, no_traffic_s: f64, length_m: f64) -> RouteCandidate {
        RouteCandidate {
            geometry: vec![],
            travel_time_s: Some(travel_time_s),
            no_traffic_s: Some(no_traffic_s),
            length_m: Some(length_m),
            delay_s: None,
        }
    }

    pub fn with_geometry(mut self, geometry: Vec<(f64, f64)>) -> RouteCandidate {
        self.geometry = geometry;
        self
    }

    pub fn with_provider_delay(mut self, delay_s: f64) -> RouteCandidate {
        self.delay_s = Some(delay_s);
        self
    }
}
