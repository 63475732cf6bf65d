use routerank_core::model::{route_field, DegenerateInputWarning, RouteCandidate, RouteFeatures};
use uom::si::f64::Length;
use uom::si::length::{kilometer, meter};

/// derives the scalar features of a candidate. total: malformed numeric
/// fields never fail extraction.
pub fn extract(candidate: &RouteCandidate) -> RouteFeatures {
    let (features, _) = extract_with_warnings(0, candidate);
    features
}

/// derives the scalar features of a candidate, reporting any degenerate
/// input found along the way.
///
/// # Arguments
///
/// * `route_index` - position of the candidate in provider order, used to label warnings
/// * `candidate`   - raw provider route
///
/// # Returns
///
/// * features where missing or negative inputs were clamped to 0 and the
///   congestion ratio is absent if the free-flow time is not positive.
///   delay is derived from the two travel times whenever the free-flow time
///   is positive, overriding any provider delay.
pub fn extract_with_warnings(
    route_index: usize,
    candidate: &RouteCandidate,
) -> (RouteFeatures, Vec<DegenerateInputWarning>) {
    let mut warnings = vec![];
    let travel_time = sanitize(
        route_index,
        route_field::TRAVEL_TIME_S,
        candidate.travel_time_s,
        &mut warnings,
    );
    let no_traffic = sanitize(
        route_index,
        route_field::NO_TRAFFIC_S,
        candidate.no_traffic_s,
        &mut warnings,
    );
    let length = sanitize(
        route_index,
        route_field::LENGTH_M,
        candidate.length_m,
        &mut warnings,
    );
    let provider_delay = sanitize(
        route_index,
        route_field::DELAY_S,
        candidate.delay_s,
        &mut warnings,
    );

    if candidate.travel_time_s.is_none() {
        warnings.push(DegenerateInputWarning::MissingTravelTime { route_index });
    }
    if candidate.no_traffic_s.is_none() {
        warnings.push(DegenerateInputWarning::MissingNoTrafficTime { route_index });
    }
    if candidate.length_m.is_none() {
        warnings.push(DegenerateInputWarning::MissingLength { route_index });
    }

    let (delay_s, congestion_ratio) = match (travel_time, no_traffic) {
        (Some(t), Some(n)) if n > 0.0 => ((t - n).max(0.0), Some(t / n)),
        _ => (provider_delay.unwrap_or_default(), None),
    };

    let length_m = length.unwrap_or_default();
    let length_km = Length::new::<meter>(length_m).get::<kilometer>();

    let features = RouteFeatures {
        travel_time_s: travel_time.unwrap_or_default(),
        no_traffic_s: no_traffic.unwrap_or_default(),
        delay_s,
        length_m,
        length_km,
        congestion_ratio,
    };
    (features, warnings)
}

/// finite values pass through, negatives are clamped to 0, non-finite values
/// are dropped.
fn sanitize(
    route_index: usize,
    field: &str,
    value: Option<f64>,
    warnings: &mut Vec<DegenerateInputWarning>,
) -> Option<f64> {
    let v = value?;
    if !v.is_finite() {
        warnings.push(DegenerateInputWarning::NonFiniteValue {
            route_index,
            field: field.to_string(),
            value: v,
        });
        None
    } else if v < 0.0 {
        warnings.push(DegenerateInputWarning::NegativeValue {
            route_index,
            field: field.to_string(),
            value: v,
        });
        Some(0.0)
    } else {
        Some(v)
    }
}
