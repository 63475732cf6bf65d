use super::{CongestionPrediction, RouteFeatures};
use serde::{Deserialize, Serialize};

/// a candidate route annotated with its features, predicted congestion and cost.
///
/// `route_index` is the 0-based position of the candidate in the provider's
/// input order. it is assigned before ranking and is never changed by it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoredRoute {
    pub route_index: usize,
    pub travel_time_s: f64,
    pub no_traffic_s: f64,
    pub delay_s: f64,
    pub length_m: f64,
    #[serde(default)]
    pub congestion_ratio: Option<f64>,
    pub calculated_cost: f64,
    #[serde(default)]
    pub ml_predicted_congestion: CongestionPrediction,
    #[serde(default)]
    pub geometry: Vec<(f64, f64)>,
}

impl ScoredRoute {
    pub fn new(
        route_index: usize,
        features: &RouteFeatures,
        calculated_cost: f64,
        ml_predicted_congestion: CongestionPrediction,
        geometry: Vec<(f64, f64)>,
    ) -> ScoredRoute {
        ScoredRoute {
            route_index,
            travel_time_s: features.travel_time_s,
            no_traffic_s: features.no_traffic_s,
            delay_s: features.delay_s,
            length_m: features.length_m,
            congestion_ratio: features.congestion_ratio,
            calculated_cost,
            ml_predicted_congestion,
            geometry,
        }
    }

    /// the features this route was scored with.
    pub fn features(&self) -> RouteFeatures {
        RouteFeatures {
            travel_time_s: self.travel_time_s,
            no_traffic_s: self.no_traffic_s,
            delay_s: self.delay_s,
            length_m: self.length_m,
            length_km: self.length_m / 1000.0,
            congestion_ratio: self.congestion_ratio,
        }
    }
}
