use super::RouteReport;
use crate::app::AppError;
use crate::model::persistence::CsvAnalysisStore;
use chrono::Utc;
use std::path::Path;

/// reads the CSV history and builds the report of a route as of now.
pub fn run(
    history_file: &String,
    route_id: &String,
    days: u32,
    hours_ahead: u32,
    hotspot_days: u32,
) -> Result<RouteReport, AppError> {
    let store = CsvAnalysisStore::new(Path::new(history_file));
    let all_records = store.read_all()?;
    let route_records = all_records
        .iter()
        .filter(|r| r.matches_route(route_id))
        .cloned()
        .collect::<Vec<_>>();
    log::info!(
        "building report for {route_id} from {} of {} history records",
        route_records.len(),
        all_records.len()
    );
    Ok(RouteReport::new(
        route_id,
        &route_records,
        &all_records,
        Utc::now(),
        days,
        hours_ahead,
        hotspot_days,
    ))
}
