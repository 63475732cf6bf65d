use super::analytics_ops::{records_within, round2, seconds_to_minutes};
use super::{mean, std_dev};
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// fewest analyses in the window needed to score reliability.
pub const MIN_RELIABILITY_SAMPLES: usize = 5;

/// share of the mean travel time a trip may deviate by and still count as consistent.
const CONSISTENCY_TOLERANCE: f64 = 0.2;

/// how predictable the travel time of a route has been. travel times are
/// in minutes, scores are percentages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RouteReliability {
    pub reliability_score: Option<f64>,
    pub consistency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_travel_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_travel_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,
    pub data_points: usize,
}

/// reliability of a route over the last `days`.
///
/// the score is `(1 - cv) * 100` clamped to [0, 100] where cv is the
/// coefficient of variation of the travel time. consistency is the
/// percentage of trips within 20% of the mean travel time.
pub fn route_reliability(
    records: &[AnalysisRecord],
    now: DateTime<Utc>,
    days: u32,
) -> RouteReliability {
    let window = records_within(records, now, days);
    let data_points = window.len();
    if data_points < MIN_RELIABILITY_SAMPLES {
        return RouteReliability {
            data_points,
            ..Default::default()
        };
    }
    let minutes = window
        .iter()
        .map(|r| seconds_to_minutes(r.travel_time_s))
        .collect_vec();
    let (avg, std) = match (mean(&minutes), std_dev(&minutes)) {
        (Some(avg), Some(std)) => (avg, std),
        _ => {
            return RouteReliability {
                data_points,
                ..Default::default()
            }
        }
    };
    let cv = if avg > 0.0 { std / avg } else { 1.0 };
    let score = ((1.0 - cv) * 100.0).clamp(0.0, 100.0);
    let within = minutes
        .iter()
        .filter(|t| {
            if avg > 0.0 {
                (*t - avg).abs() / avg <= CONSISTENCY_TOLERANCE
            } else {
                **t == avg
            }
        })
        .count();
    let consistency = within as f64 / minutes.len() as f64 * 100.0;
    let min = minutes.iter().copied().map(OrderedFloat).min().map(|v| v.0);
    let max = minutes.iter().copied().map(OrderedFloat).max().map(|v| v.0);

    RouteReliability {
        reliability_score: Some(round2(score)),
        consistency: Some(round2(consistency)),
        avg_travel_time: Some(round2(avg)),
        std_travel_time: Some(round2(std)),
        min_time: min.map(round2),
        max_time: max.map(round2),
        data_points,
    }
}
