use super::{FeatureVector, PredictionError};

/// documented output range of a congestion model unless it declares its own.
pub const DEFAULT_PREDICTION_BOUNDS: (f64, f64) = (0.0, 10.0);

/// a loaded, immutable regression model that maps a feature vector to a
/// congestion score. implementations are shared across concurrent analyses
/// and must not mutate on inference.
pub trait CongestionModel: Send + Sync {
    /// raw model output for a single row.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// inclusive range every prediction is clamped into.
    fn bounds(&self) -> (f64, f64) {
        DEFAULT_PREDICTION_BOUNDS
    }
}
