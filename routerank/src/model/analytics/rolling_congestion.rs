use super::analytics_ops::records_within;
use super::{mean, std_dev};
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// mean and spread of the congestion ratio over a trailing window. these are
/// the rolling inputs of the congestion model.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RollingCongestion {
    pub mean: f64,
    pub std: f64,
    pub data_points: usize,
}

/// None when no analysis in the window has a usable congestion ratio.
pub fn rolling_congestion(
    records: &[AnalysisRecord],
    now: DateTime<Utc>,
    days: u32,
) -> Option<RollingCongestion> {
    let ratios = records_within(records, now, days)
        .into_iter()
        .filter_map(|r| r.congestion_ratio())
        .collect_vec();
    Some(RollingCongestion {
        mean: mean(&ratios)?,
        std: std_dev(&ratios)?,
        data_points: ratios.len(),
    })
}
