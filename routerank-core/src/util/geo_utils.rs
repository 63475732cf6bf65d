use geo::{Coord, Haversine, Length, LineString};
use uom::si::f64::Length as Distance;
use uom::si::length::meter;

/// converts a (lat, lon) geometry into a geo LineString with x=lon, y=lat.
pub fn to_line_string(geometry: &[(f64, f64)]) -> LineString<f64> {
    geometry
        .iter()
        .map(|(lat, lon)| Coord { x: *lon, y: *lat })
        .collect::<Vec<_>>()
        .into()
}

/// great circle length of a (lat, lon) geometry. None when fewer than two
/// points are available or any point is non-finite.
///
/// # Arguments
///
/// * `geometry` - ordered sequence of (lat, lon) points
///
/// # Returns
///
/// * the summed haversine length of each segment
pub fn haversine_length(geometry: &[(f64, f64)]) -> Option<Distance> {
    if geometry.len() < 2 {
        return None;
    }
    if geometry
        .iter()
        .any(|(lat, lon)| !lat.is_finite() || !lon.is_finite())
    {
        return None;
    }
    let line = to_line_string(geometry);
    Some(Distance::new::<meter>(Haversine.length(&line)))
}

/// great circle distance between two (lat, lon) points.
pub fn haversine_distance(src: (f64, f64), dst: (f64, f64)) -> Option<Distance> {
    haversine_length(&[src, dst])
}
