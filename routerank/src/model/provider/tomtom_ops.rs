use super::{ProviderError, TomTomResponse, TomTomRoute};
use routerank_core::model::{LocationRef, RouteCandidate};
use routerank_core::util::geo_utils;
use std::path::Path;
use uom::si::length::meter;

/// reads a saved TomTom routing response from a JSON file.
pub fn read_response_file(path: &Path) -> Result<TomTomResponse, ProviderError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ProviderError::ReadError(path.to_string_lossy().to_string(), e))?;
    let response = serde_json::from_str(&contents)?;
    Ok(response)
}

/// converts every route of a response into a candidate, in provider order.
pub fn candidates_from_response(
    response: &TomTomResponse,
    origin: &LocationRef,
    destination: &LocationRef,
) -> Vec<RouteCandidate> {
    let candidates = response
        .routes
        .iter()
        .map(|r| candidate_from_route(r, origin, destination))
        .collect::<Vec<_>>();
    log::debug!(
        "read {} route candidates for {origin}→{destination}",
        candidates.len()
    );
    candidates
}

/// converts one provider route into a candidate.
///
/// a missing or zero `lengthInMeters` is replaced by the haversine length of
/// the route geometry, or by the straight line distance between origin and
/// destination when the geometry is too short and both are coordinates.
pub fn candidate_from_route(
    route: &TomTomRoute,
    origin: &LocationRef,
    destination: &LocationRef,
) -> RouteCandidate {
    let geometry = route.geometry();
    let summary = &route.summary;
    let length_m = match summary.length_in_meters {
        Some(l) if l != 0.0 => Some(l),
        reported => fallback_length(&geometry, origin, destination).or(reported),
    };
    RouteCandidate {
        geometry,
        travel_time_s: summary.travel_time_in_seconds,
        no_traffic_s: summary.no_traffic_travel_time_in_seconds,
        length_m,
        delay_s: summary.traffic_delay_in_seconds,
    }
}

fn fallback_length(
    geometry: &[(f64, f64)],
    origin: &LocationRef,
    destination: &LocationRef,
) -> Option<f64> {
    let length = geo_utils::haversine_length(geometry).or_else(|| {
        let src = origin.coordinate()?;
        let dst = destination.coordinate()?;
        geo_utils::haversine_distance(src, dst)
    })?;
    let length_m = length.get::<meter>();
    log::debug!("route length missing from provider summary, using {length_m:.1}m");
    Some(length_m)
}
