use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a non-fatal problem found in a single candidate. the candidate is still
/// scored, with the affected term contributing 0.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DegenerateInputWarning {
    MissingTravelTime { route_index: usize },
    MissingNoTrafficTime { route_index: usize },
    MissingLength { route_index: usize },
    NegativeValue { route_index: usize, field: String, value: f64 },
    NonFiniteValue { route_index: usize, field: String, value: f64 },
}

impl DegenerateInputWarning {
    pub fn route_index(&self) -> usize {
        match self {
            DegenerateInputWarning::MissingTravelTime { route_index } => *route_index,
            DegenerateInputWarning::MissingNoTrafficTime { route_index } => *route_index,
            DegenerateInputWarning::MissingLength { route_index } => *route_index,
            DegenerateInputWarning::NegativeValue { route_index, .. } => *route_index,
            DegenerateInputWarning::NonFiniteValue { route_index, .. } => *route_index,
        }
    }
}

impl Display for DegenerateInputWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateInputWarning::MissingTravelTime { route_index } => {
                write!(f, "route {route_index} is missing travel_time_s")
            }
            DegenerateInputWarning::MissingNoTrafficTime { route_index } => {
                write!(f, "route {route_index} is missing no_traffic_s")
            }
            DegenerateInputWarning::MissingLength { route_index } => {
                write!(f, "route {route_index} is missing length_m")
            }
            DegenerateInputWarning::NegativeValue {
                route_index,
                field,
                value,
            } => write!(
                f,
                "route {route_index} has negative {field} ({value}), clamped to 0"
            ),
            DegenerateInputWarning::NonFiniteValue {
                route_index,
                field,
                value,
            } => write!(
                f,
                "route {route_index} has non-finite {field} ({value}), treated as missing"
            ),
        }
    }
}
