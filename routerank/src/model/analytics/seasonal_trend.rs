use super::analytics_ops::{records_within, seconds_to_minutes};
use super::mean;
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// a window of `months` spans `months * 30` days.
const DAYS_PER_MONTH: u32 = 30;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonthlyProfile {
    pub month: String,
    pub month_index: u32,
    pub avg_travel_time: f64,
    pub avg_delay: f64,
    pub count: usize,
}

/// travel time by calendar month. times are in minutes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SeasonalTrend {
    pub data: Vec<MonthlyProfile>,
}

pub fn seasonal_trend(records: &[AnalysisRecord], now: DateTime<Utc>, months: u32) -> SeasonalTrend {
    let data = records_within(records, now, months.saturating_mul(DAYS_PER_MONTH))
        .into_iter()
        .filter(|r| (1..=12).contains(&r.month))
        .into_group_map_by(|r| r.month)
        .into_iter()
        .map(|(month_index, group)| {
            let travel = group
                .iter()
                .map(|r| seconds_to_minutes(r.travel_time_s))
                .collect_vec();
            let delay = group
                .iter()
                .map(|r| seconds_to_minutes(r.delay_s))
                .collect_vec();
            MonthlyProfile {
                month: MONTH_NAMES[(month_index - 1) as usize].to_string(),
                month_index,
                avg_travel_time: mean(&travel).unwrap_or_default(),
                avg_delay: mean(&delay).unwrap_or_default(),
                count: group.len(),
            }
        })
        .sorted_by_key(|m| m.month_index)
        .collect_vec();
    SeasonalTrend { data }
}
