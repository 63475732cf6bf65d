use crate::model::selection::Selection;
use chrono::{DateTime, Utc};
use routerank_core::model::{AnalysisResult, AnalysisStatus, DegenerateInputWarning, LocationRef};

/// packages a selection with its origin and destination. the locations are
/// forwarded as received; only the route id is derived from them.
pub fn assemble(
    origin: LocationRef,
    destination: LocationRef,
    selection: Selection,
    timestamp: DateTime<Utc>,
    warnings: Vec<DegenerateInputWarning>,
) -> AnalysisResult {
    let route_id = AnalysisResult::derive_route_id(&origin, &destination);
    let status = if selection.ranked.is_empty() {
        AnalysisStatus::NoRoutesFound
    } else {
        AnalysisStatus::Ranked
    };
    AnalysisResult {
        origin,
        destination,
        route_id,
        status,
        analyzed_routes: selection.ranked,
        best_route_index: selection.best_route_index,
        timestamp,
        warnings,
    }
}
