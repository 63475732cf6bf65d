use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// terminal state of an analysis. an empty candidate set is a valid outcome,
/// distinct from a provider failure which never reaches the engine.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Ranked,
    NoRoutesFound,
}

impl Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStatus::Ranked => write!(f, "ranked"),
            AnalysisStatus::NoRoutesFound => write!(f, "no routes found"),
        }
    }
}
