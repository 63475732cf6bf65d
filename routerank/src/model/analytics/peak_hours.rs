use super::analytics_ops::{records_within, seconds_to_minutes};
use super::mean;
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

const PEAK_HOUR_COUNT: usize = 3;

/// averages of the analyses that ran during one hour of the day. times are in minutes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HourlyProfile {
    pub hour: u32,
    pub avg_travel_time: f64,
    pub avg_delay: f64,
    pub avg_congestion: Option<f64>,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PeakHours {
    /// the three slowest hours, slowest first
    pub peak_hours: Vec<u32>,
    /// the three fastest hours, in the same slowest-first order
    pub off_peak_hours: Vec<u32>,
    /// per-hour averages ordered by hour
    pub data: Vec<HourlyProfile>,
    pub best_hour: Option<u32>,
    pub worst_hour: Option<u32>,
}

pub fn peak_hours(records: &[AnalysisRecord], now: DateTime<Utc>, days: u32) -> PeakHours {
    let window = records_within(records, now, days);
    let data = window
        .into_iter()
        .into_group_map_by(|r| r.hour_of_day)
        .into_iter()
        .map(|(hour, group)| hourly_profile(hour, &group))
        .sorted_by_key(|p| p.hour)
        .collect_vec();
    if data.is_empty() {
        return PeakHours::default();
    }

    // slowest first, earlier hour wins ties
    let by_travel_time = data
        .iter()
        .sorted_by_key(|p| (std::cmp::Reverse(OrderedFloat(p.avg_travel_time)), p.hour))
        .map(|p| p.hour)
        .collect_vec();
    let peak_hours = by_travel_time.iter().take(PEAK_HOUR_COUNT).copied().collect();
    let off_peak_hours = by_travel_time
        .iter()
        .skip(by_travel_time.len().saturating_sub(PEAK_HOUR_COUNT))
        .copied()
        .collect();

    PeakHours {
        peak_hours,
        off_peak_hours,
        best_hour: by_travel_time.last().copied(),
        worst_hour: by_travel_time.first().copied(),
        data,
    }
}

fn hourly_profile(hour: u32, group: &[&AnalysisRecord]) -> HourlyProfile {
    let travel = group
        .iter()
        .map(|r| seconds_to_minutes(r.travel_time_s))
        .collect_vec();
    let delay = group
        .iter()
        .map(|r| seconds_to_minutes(r.delay_s))
        .collect_vec();
    let congestion = group
        .iter()
        .filter_map(|r| r.congestion_ratio())
        .collect_vec();
    HourlyProfile {
        hour,
        avg_travel_time: mean(&travel).unwrap_or_default(),
        avg_delay: mean(&delay).unwrap_or_default(),
        avg_congestion: mean(&congestion),
        count: group.len(),
    }
}
