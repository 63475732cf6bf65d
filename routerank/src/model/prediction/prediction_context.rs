use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLLING_MEAN_CONGESTION: f64 = 1.0;
pub const DEFAULT_ROLLING_STD_CONGESTION: f64 = 0.0;

/// request-time signals the congestion model was trained on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PredictionContext {
    pub requested_at: DateTime<Utc>,
    pub rolling_mean_congestion: f64,
    pub rolling_std_congestion: f64,
}

impl PredictionContext {
    pub fn new(requested_at: DateTime<Utc>) -> PredictionContext {
        PredictionContext {
            requested_at,
            rolling_mean_congestion: DEFAULT_ROLLING_MEAN_CONGESTION,
            rolling_std_congestion: DEFAULT_ROLLING_STD_CONGESTION,
        }
    }

    pub fn with_rolling_congestion(mut self, mean: f64, std: f64) -> PredictionContext {
        self.rolling_mean_congestion = mean;
        self.rolling_std_congestion = std;
        self
    }

    pub fn hour(&self) -> u32 {
        self.requested_at.hour()
    }

    /// 0 = Monday
    pub fn weekday(&self) -> u32 {
        self.requested_at.weekday().num_days_from_monday()
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday() >= 5
    }
}
