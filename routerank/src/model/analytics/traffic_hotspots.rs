use super::analytics_ops::{records_within, round2, seconds_to_minutes};
use super::mean;
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// fewest analyses of a route before it can be reported as a hotspot.
pub const MIN_HOTSPOT_SAMPLES: usize = 5;

const MAX_HOTSPOTS: usize = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrafficHotspot {
    pub route_id: String,
    pub avg_delay_minutes: f64,
    pub avg_congestion: f64,
    pub analysis_count: usize,
}

/// routes with the highest average delay over the last `days`, across the
/// whole history. only analyses with a positive free-flow time count.
pub fn traffic_hotspots(
    records: &[AnalysisRecord],
    now: DateTime<Utc>,
    days: u32,
) -> Vec<TrafficHotspot> {
    records_within(records, now, days)
        .into_iter()
        .filter(|r| r.no_traffic_s > 0.0)
        .into_group_map_by(|r| r.route_id.clone())
        .into_iter()
        .filter(|(_, group)| group.len() >= MIN_HOTSPOT_SAMPLES)
        .filter_map(|(route_id, group)| {
            let delay = group.iter().map(|r| r.delay_s).collect_vec();
            let congestion = group
                .iter()
                .filter_map(|r| r.congestion_ratio())
                .collect_vec();
            Some((route_id, mean(&delay)?, mean(&congestion)?, group.len()))
        })
        .sorted_by_key(|(route_id, delay, _, _)| {
            (std::cmp::Reverse(OrderedFloat(*delay)), route_id.clone())
        })
        .take(MAX_HOTSPOTS)
        .map(|(route_id, delay, congestion, count)| TrafficHotspot {
            route_id,
            avg_delay_minutes: round2(seconds_to_minutes(delay)),
            avg_congestion: round2(congestion),
            analysis_count: count,
        })
        .collect_vec()
}
