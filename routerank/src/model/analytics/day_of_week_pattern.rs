use super::analytics_ops::{records_within, seconds_to_minutes};
use super::mean;
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// first day index of the weekend (Saturday).
const WEEKEND_START: u32 = 5;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DailyProfile {
    pub day: String,
    pub day_index: u32,
    pub avg_travel_time: f64,
    pub avg_delay: f64,
    pub avg_cost: f64,
    pub count: usize,
}

/// travel time by day of the week. times are in minutes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DayOfWeekPattern {
    pub data: Vec<DailyProfile>,
    pub weekday_avg: f64,
    pub weekend_avg: f64,
    pub best_day: Option<String>,
    pub worst_day: Option<String>,
}

pub fn day_of_week_pattern(
    records: &[AnalysisRecord],
    now: DateTime<Utc>,
    days: u32,
) -> DayOfWeekPattern {
    let data = records_within(records, now, days)
        .into_iter()
        .into_group_map_by(|r| r.day_of_week)
        .into_iter()
        .map(|(day_index, group)| {
            let travel = group
                .iter()
                .map(|r| seconds_to_minutes(r.travel_time_s))
                .collect_vec();
            let delay = group
                .iter()
                .map(|r| seconds_to_minutes(r.delay_s))
                .collect_vec();
            let cost = group.iter().map(|r| r.calculated_cost).collect_vec();
            DailyProfile {
                day: day_name(day_index),
                day_index,
                avg_travel_time: mean(&travel).unwrap_or_default(),
                avg_delay: mean(&delay).unwrap_or_default(),
                avg_cost: mean(&cost).unwrap_or_default(),
                count: group.len(),
            }
        })
        .sorted_by_key(|d| d.day_index)
        .collect_vec();

    // averages of the daily averages, 0 when no such day was observed
    let avg_of = |weekend: bool| {
        let values = data
            .iter()
            .filter(|d| (d.day_index >= WEEKEND_START) == weekend)
            .map(|d| d.avg_travel_time)
            .collect_vec();
        mean(&values).unwrap_or_default()
    };
    let best_day = data
        .iter()
        .min_by_key(|d| OrderedFloat(d.avg_travel_time))
        .map(|d| d.day.clone());
    let worst_day = data
        .iter()
        .max_by_key(|d| OrderedFloat(d.avg_travel_time))
        .map(|d| d.day.clone());

    DayOfWeekPattern {
        weekday_avg: avg_of(false),
        weekend_avg: avg_of(true),
        best_day,
        worst_day,
        data,
    }
}

fn day_name(day_index: u32) -> String {
    DAY_NAMES
        .get(day_index as usize)
        .map(|d| d.to_string())
        .unwrap_or_else(|| String::from("Unknown"))
}
