use super::{PredictionContext, PredictionError};
use routerank_core::model::RouteFeatures;

/// names of the model inputs, in the order the model was trained with.
pub const FEATURE_NAMES: [&str; 10] = [
    "hour",
    "weekday",
    "is_weekend",
    "distance_km",
    "route_index",
    "travel_time_s",
    "no_traffic_s",
    "delay_s",
    "rolling_mean_congestion",
    "rolling_std_congestion",
];

/// a named, ordered model input row.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    values: Vec<(&'static str, f64)>,
}

impl FeatureVector {
    pub fn new(
        route_index: usize,
        features: &RouteFeatures,
        context: &PredictionContext,
    ) -> FeatureVector {
        let is_weekend = if context.is_weekend() { 1.0 } else { 0.0 };
        let values = [
            context.hour() as f64,
            context.weekday() as f64,
            is_weekend,
            features.length_km,
            route_index as f64,
            features.travel_time_s,
            features.no_traffic_s,
            features.delay_s,
            context.rolling_mean_congestion,
            context.rolling_std_congestion,
        ];
        FeatureVector {
            values: FEATURE_NAMES.into_iter().zip(values).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, f64)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// rejects NaN and infinite inputs.
    pub fn validate(&self) -> Result<(), PredictionError> {
        match self.values.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, value)) => Err(PredictionError::InvalidFeature {
                name: name.to_string(),
                value: *value,
            }),
            None => Ok(()),
        }
    }
}
