use chrono::{DateTime, Datelike, Timelike, Utc};
use itertools::Itertools;
use routerank_core::model::{route_field, AnalysisResult};
use serde::{Deserialize, Serialize};

/// one scored route of a past analysis, flattened for storage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisRecord {
    pub timestamp: DateTime<Utc>,
    /// `"{origin}→{destination}_route{route_index}"`
    pub route_id: String,
    pub origin: String,
    pub destination: String,
    pub travel_time_s: f64,
    pub no_traffic_s: f64,
    pub delay_s: f64,
    pub length_m: f64,
    pub calculated_cost: f64,
    pub ml_predicted: Option<f64>,
    pub hour_of_day: u32,
    /// 0 = Monday
    pub day_of_week: u32,
    /// 1 = January
    pub month: u32,
}

impl AnalysisRecord {
    /// flattens a result into one record per scored route, ordered by
    /// route index.
    pub fn from_result(result: &AnalysisResult) -> Vec<AnalysisRecord> {
        let ts = result.timestamp;
        result
            .analyzed_routes
            .iter()
            .sorted_by_key(|r| r.route_index)
            .map(|r| AnalysisRecord {
                timestamp: ts,
                route_id: AnalysisResult::derive_route_record_id(&result.route_id, r.route_index),
                origin: result.origin.to_string(),
                destination: result.destination.to_string(),
                travel_time_s: r.travel_time_s,
                no_traffic_s: r.no_traffic_s,
                delay_s: r.delay_s,
                length_m: r.length_m,
                calculated_cost: r.calculated_cost,
                ml_predicted: r.ml_predicted_congestion.value(),
                hour_of_day: ts.hour(),
                day_of_week: ts.weekday().num_days_from_monday(),
                month: ts.month(),
            })
            .collect_vec()
    }

    /// true when `route_id` names this record's route, either exactly or as
    /// the origin/destination pair followed by `_route{index}`.
    pub fn matches_route(&self, route_id: &str) -> bool {
        match self.route_id.strip_prefix(route_id) {
            Some("") => true,
            Some(rest) => rest
                .strip_prefix(route_field::ROUTE_INDEX_SUFFIX)
                .is_some_and(|i| !i.is_empty() && i.bytes().all(|b| b.is_ascii_digit())),
            None => false,
        }
    }

    /// travel time over free-flow time, None when the free-flow time is not positive.
    pub fn congestion_ratio(&self) -> Option<f64> {
        if self.no_traffic_s > 0.0 {
            Some(self.travel_time_s / self.no_traffic_s)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::AnalysisRecord;
    use chrono::{TimeZone, Utc};
    use routerank_core::model::{
        AnalysisResult, AnalysisStatus, CongestionPrediction, LocationRef, RouteFeatures,
        ScoredRoute,
    };

    fn scored(route_index: usize, travel_time_s: f64, no_traffic_s: f64) -> ScoredRoute {
        let features = RouteFeatures {
            travel_time_s,
            no_traffic_s,
            delay_s: (travel_time_s - no_traffic_s).max(0.0),
            length_m: 1000.0,
            length_km: 1.0,
            congestion_ratio: None,
        };
        ScoredRoute::new(
            route_index,
            &features,
            travel_time_s,
            CongestionPrediction::predicted(1.2),
            vec![],
        )
    }

    #[test]
    fn test_from_result() {
        let origin = LocationRef::Named(String::from("a"));
        let destination = LocationRef::Named(String::from("b"));
        let result = AnalysisResult {
            route_id: AnalysisResult::derive_route_id(&origin, &destination),
            origin,
            destination,
            status: AnalysisStatus::Ranked,
            analyzed_routes: vec![scored(1, 1500.0, 1500.0), scored(0, 1800.0, 1200.0)],
            best_route_index: Some(1),
            // a sunday in march
            timestamp: Utc.with_ymd_and_hms(2024, 3, 10, 17, 45, 0).unwrap(),
            warnings: vec![],
        };
        let records = AnalysisRecord::from_result(&result);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].route_id, "a→b_route0");
        assert_eq!(records[1].route_id, "a→b_route1");
        assert_eq!(records[0].delay_s, 600.0);
        assert_eq!(records[0].ml_predicted, Some(1.2));
        assert_eq!(records[0].hour_of_day, 17);
        assert_eq!(records[0].day_of_week, 6);
        assert_eq!(records[0].month, 3);
        assert_eq!(records[0].congestion_ratio(), Some(1.5));
    }

    #[test]
    fn test_congestion_ratio_without_free_flow_time() {
        let record = AnalysisRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 10, 17, 45, 0).unwrap(),
            route_id: String::from("a→b_route0"),
            origin: String::from("a"),
            destination: String::from("b"),
            travel_time_s: 100.0,
            no_traffic_s: 0.0,
            delay_s: 0.0,
            length_m: 0.0,
            calculated_cost: 100.0,
            ml_predicted: None,
            hour_of_day: 17,
            day_of_week: 6,
            month: 3,
        };
        assert_eq!(record.congestion_ratio(), None);
    }

    #[test]
    fn test_matches_route() {
        let record = AnalysisRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 10, 17, 45, 0).unwrap(),
            route_id: String::from("Saket→Noida Sector 18_route2"),
            origin: String::from("Saket"),
            destination: String::from("Noida Sector 18"),
            travel_time_s: 100.0,
            no_traffic_s: 100.0,
            delay_s: 0.0,
            length_m: 0.0,
            calculated_cost: 100.0,
            ml_predicted: None,
            hour_of_day: 17,
            day_of_week: 6,
            month: 3,
        };
        assert!(record.matches_route("Saket→Noida Sector 18"));
        assert!(record.matches_route("Saket→Noida Sector 18_route2"));
        assert!(!record.matches_route("Saket→Noida Sector 1"));
        assert!(!record.matches_route("Saket→Noida Sector 18_route"));
        assert!(!record.matches_route("Saket→Noida Sector 18_route20"));
        assert!(!record.matches_route("Saket"));
    }
}
