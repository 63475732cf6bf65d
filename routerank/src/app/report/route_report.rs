use super::{DAY_OF_WEEK_DAYS, SEASONAL_MONTHS};
use crate::model::analytics::{
    self, CongestionForecast, DayOfWeekPattern, PeakHours, RollingCongestion, RouteReliability,
    SeasonalTrend, TrafficHotspot,
};
use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// every historical statistic of one origin/destination pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteReport {
    pub route_id: String,
    pub generated_at: DateTime<Utc>,
    pub reliability: RouteReliability,
    pub forecast: CongestionForecast,
    pub peak_hours: PeakHours,
    pub day_of_week: DayOfWeekPattern,
    pub seasonal: SeasonalTrend,
    pub rolling_congestion: Option<RollingCongestion>,
    /// hotspots across the whole history, not only this route
    pub hotspots: Vec<TrafficHotspot>,
}

impl RouteReport {
    /// builds a report.
    ///
    /// # Arguments
    /// * `route_id` - route id (prefix) the report is about
    /// * `route_records` - history records matching `route_id`
    /// * `all_records` - the full history, used for hotspots
    /// * `now` - time the windows are measured from
    /// * `days` - window for reliability, peak hours and rolling congestion
    /// * `hours_ahead` - forecast horizon
    /// * `hotspot_days` - window for hotspots
    pub fn new(
        route_id: &str,
        route_records: &[AnalysisRecord],
        all_records: &[AnalysisRecord],
        now: DateTime<Utc>,
        days: u32,
        hours_ahead: u32,
        hotspot_days: u32,
    ) -> RouteReport {
        RouteReport {
            route_id: route_id.to_string(),
            generated_at: now,
            reliability: analytics::route_reliability(route_records, now, days),
            forecast: analytics::forecast_congestion(route_records, now, hours_ahead),
            peak_hours: analytics::peak_hours(route_records, now, days),
            day_of_week: analytics::day_of_week_pattern(route_records, now, DAY_OF_WEEK_DAYS),
            seasonal: analytics::seasonal_trend(route_records, now, SEASONAL_MONTHS),
            rolling_congestion: analytics::rolling_congestion(route_records, now, days),
            hotspots: analytics::traffic_hotspots(all_records, now, hotspot_days),
        }
    }
}
