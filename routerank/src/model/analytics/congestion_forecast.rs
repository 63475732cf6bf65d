use super::analytics_ops::{round2, seconds_to_minutes};
use super::{mean, std_dev};
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Duration, Timelike, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// most recent analyses at the target hour that feed a forecast.
pub const FORECAST_SAMPLE_SIZE: usize = 50;

/// expected congestion ratio of a route at a future hour, based on past
/// analyses at that hour of day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CongestionForecast {
    pub target_hour: u32,
    pub predicted_congestion: Option<f64>,
    /// percentage, higher when past ratios agree
    pub confidence: Option<f64>,
    /// minutes, scaled from the free-flow time of the newest analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_travel_time: Option<f64>,
    pub data_points: usize,
}

pub fn forecast_congestion(
    records: &[AnalysisRecord],
    now: DateTime<Utc>,
    hours_ahead: u32,
) -> CongestionForecast {
    let target_hour = (now + Duration::hours(hours_ahead as i64)).hour();
    let at_hour = records
        .iter()
        .filter(|r| r.hour_of_day == target_hour)
        .sorted_by_key(|r| std::cmp::Reverse(r.timestamp))
        .take(FORECAST_SAMPLE_SIZE)
        .collect_vec();
    let ratios = at_hour
        .iter()
        .filter_map(|r| r.congestion_ratio())
        .collect_vec();
    let (predicted, std) = match (mean(&ratios), std_dev(&ratios)) {
        (Some(p), Some(s)) => (p, s),
        _ => {
            return CongestionForecast {
                target_hour,
                ..Default::default()
            }
        }
    };
    let confidence = if predicted > 0.0 {
        ((1.0 - std / predicted) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let predicted_travel_time = at_hour
        .first()
        .filter(|r| r.no_traffic_s > 0.0)
        .map(|r| round2(predicted * seconds_to_minutes(r.no_traffic_s)));

    CongestionForecast {
        target_hour,
        predicted_congestion: Some(round2(predicted)),
        confidence: Some(round2(confidence)),
        predicted_travel_time,
        data_points: ratios.len(),
    }
}
