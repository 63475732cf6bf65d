use super::{
    route_field, AnalysisStatus, DegenerateInputWarning, LocationRef, ScoredRoute,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// the ranked output of one analysis.
///
/// `analyzed_routes` is in display order (ascending cost, ties by route
/// index) while each route keeps its original `route_index`.
/// `best_route_index` is absent only when there were no candidates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub origin: LocationRef,
    pub destination: LocationRef,
    pub route_id: String,
    pub status: AnalysisStatus,
    pub analyzed_routes: Vec<ScoredRoute>,
    pub best_route_index: Option<usize>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DegenerateInputWarning>,
}

impl AnalysisResult {
    /// identity of an origin/destination pair, shared with the persistence
    /// layer so a later lookup by the same string finds this analysis.
    pub fn derive_route_id(origin: &LocationRef, destination: &LocationRef) -> String {
        format!("{origin}{}{destination}", route_field::ROUTE_ID_SEPARATOR)
    }

    /// identity of a single route of an analysis in the history.
    pub fn derive_route_record_id(route_id: &str, route_index: usize) -> String {
        format!("{route_id}{}{route_index}", route_field::ROUTE_INDEX_SUFFIX)
    }

    pub fn best_route(&self) -> Option<&ScoredRoute> {
        let best = self.best_route_index?;
        self.route(best)
    }

    /// finds a route by its original (provider order) index.
    pub fn route(&self, route_index: usize) -> Option<&ScoredRoute> {
        self.analyzed_routes
            .iter()
            .find(|r| r.route_index == route_index)
    }

    pub fn is_empty(&self) -> bool {
        self.analyzed_routes.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::AnalysisResult;
    use crate::model::LocationRef;

    #[test]
    fn test_route_id_from_names_and_coordinates() {
        let o = LocationRef::Named(String::from("India Gate"));
        let d = LocationRef::Coordinate { lat: 28.5562, lon: 77.1 };
        assert_eq!(
            AnalysisResult::derive_route_id(&o, &d),
            "India Gate→28.5562,77.1"
        );
        assert_eq!(
            AnalysisResult::derive_route_record_id("India Gate→28.5562,77.1", 2),
            "India Gate→28.5562,77.1_route2"
        );
    }
}
