use super::PersistenceError;
use routerank_core::model::{route_field::EXPORT_COLUMNS, AnalysisResult, ScoredRoute};
use routerank_core::util::geo_utils;
use std::path::Path;
use wkt::ToWkt;

/// flat export rows of a result, one per route in ranked order, with the
/// columns of [`EXPORT_COLUMNS`]. absent values are empty strings and the
/// geometry is rendered as a WKT LINESTRING.
pub fn export_rows(result: &AnalysisResult) -> Vec<Vec<String>> {
    result
        .analyzed_routes
        .iter()
        .map(|r| export_row(result, r))
        .collect()
}

/// writes the export rows of several results to one CSV file with a
/// single header row.
pub fn write_results_csv(results: &[AnalysisResult], path: &Path) -> Result<(), PersistenceError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(EXPORT_COLUMNS)?;
    for row in results.iter().flat_map(export_rows) {
        writer.write_record(&row)?;
    }
    writer
        .flush()
        .map_err(|e| PersistenceError::FileError(path.to_string_lossy().to_string(), e))?;
    Ok(())
}

fn export_row(result: &AnalysisResult, route: &ScoredRoute) -> Vec<String> {
    let optional = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    let geometry = if route.geometry.len() < 2 {
        String::new()
    } else {
        geo_utils::to_line_string(&route.geometry)
            .to_wkt()
            .to_string()
    };
    vec![
        result.route_id.clone(),
        result.origin.to_string(),
        result.destination.to_string(),
        route.route_index.to_string(),
        route.travel_time_s.to_string(),
        route.no_traffic_s.to_string(),
        route.delay_s.to_string(),
        route.length_m.to_string(),
        optional(route.congestion_ratio),
        route.calculated_cost.to_string(),
        optional(route.ml_predicted_congestion.value()),
        geometry,
    ]
}
