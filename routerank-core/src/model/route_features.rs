use serde::{Deserialize, Serialize};

/// scalar features derived from a [`super::RouteCandidate`]. every value is
/// finite and non-negative; inputs that were missing or malformed show up
/// here as 0 (or as an absent congestion ratio).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RouteFeatures {
    pub travel_time_s: f64,
    pub no_traffic_s: f64,
    /// `max(0, travel_time_s - no_traffic_s)` when both times are usable,
    /// otherwise the provider delay, otherwise 0.
    pub delay_s: f64,
    pub length_m: f64,
    pub length_km: f64,
    /// `travel_time_s / no_traffic_s`, absent when the free-flow time is 0 or missing.
    pub congestion_ratio: Option<f64>,
}
