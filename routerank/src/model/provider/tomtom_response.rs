use super::decode_polyline;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// body of a TomTom `calculateRoute` response. only the fields used for
/// scoring are modeled, everything else is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TomTomResponse {
    #[serde(default)]
    pub routes: Vec<TomTomRoute>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TomTomRoute {
    #[serde(default)]
    pub summary: TomTomSummary,
    #[serde(default)]
    pub legs: Vec<TomTomLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<TomTomGuidance>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TomTomSummary {
    #[serde(default)]
    pub travel_time_in_seconds: Option<f64>,
    #[serde(default)]
    pub no_traffic_travel_time_in_seconds: Option<f64>,
    #[serde(default)]
    pub traffic_delay_in_seconds: Option<f64>,
    #[serde(default)]
    pub length_in_meters: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TomTomLeg {
    #[serde(default)]
    pub points: LegPoints,
}

/// leg geometry, either a list of point objects or an encoded polyline.
/// point objects are kept as raw JSON since their key names vary.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum LegPoints {
    Encoded(String),
    Points(Vec<Value>),
}

impl Default for LegPoints {
    fn default() -> Self {
        LegPoints::Points(vec![])
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TomTomGuidance {
    #[serde(default)]
    pub instructions: Vec<TomTomInstruction>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TomTomInstruction {
    #[serde(default)]
    pub point: Option<Value>,
}

impl TomTomRoute {
    /// ordered (lat, lon) geometry of the route. leg points are used when
    /// present, otherwise the guidance instruction points. unreadable
    /// points are skipped.
    pub fn geometry(&self) -> Vec<(f64, f64)> {
        let from_legs = self
            .legs
            .iter()
            .flat_map(|leg| leg.points.coordinates())
            .collect::<Vec<_>>();
        if !from_legs.is_empty() {
            return from_legs;
        }
        match &self.guidance {
            Some(guidance) => guidance
                .instructions
                .iter()
                .filter_map(|i| i.point.as_ref().and_then(read_point))
                .collect(),
            None => vec![],
        }
    }
}

impl LegPoints {
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        match self {
            LegPoints::Points(points) => points.iter().filter_map(read_point).collect(),
            LegPoints::Encoded(encoded) => match decode_polyline(encoded) {
                Ok(coordinates) => coordinates,
                Err(e) => {
                    log::warn!("ignoring leg geometry: {e}");
                    vec![]
                }
            },
        }
    }
}

/// reads a point with either `latitude`/`longitude` or `lat`/`lon` keys.
/// numeric strings are accepted.
fn read_point(value: &Value) -> Option<(f64, f64)> {
    let pair = |lat_key: &str, lon_key: &str| {
        let lat = value.get(lat_key).and_then(read_number)?;
        let lon = value.get(lon_key).and_then(read_number)?;
        Some((lat, lon))
    };
    if value.get("latitude").is_some() && value.get("longitude").is_some() {
        pair("latitude", "longitude")
    } else {
        pair("lat", "lon")
    }
}

fn read_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}
