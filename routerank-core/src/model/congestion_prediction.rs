use serde::{Deserialize, Serialize};

/// output of the congestion predictor for one route. absent whenever the
/// model is unavailable or the route's features could not be used.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct CongestionPrediction(Option<f64>);

impl CongestionPrediction {
    pub fn absent() -> CongestionPrediction {
        CongestionPrediction(None)
    }

    /// wraps a model output. non-finite values are treated as absent.
    pub fn predicted(value: f64) -> CongestionPrediction {
        if value.is_finite() {
            CongestionPrediction(Some(value))
        } else {
            CongestionPrediction(None)
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<f64>> for CongestionPrediction {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => CongestionPrediction::predicted(v),
            None => CongestionPrediction::absent(),
        }
    }
}
