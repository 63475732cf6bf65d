use super::CandidateSource;
use crate::model::engine::AnalysisRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// one entry of a query file: the analysis request fields plus the source of
/// its candidate routes.
///
/// # Example
///
/// ```json
/// {
///   "origin": "Connaught Place",
///   "destination": { "lat": 28.5562, "lon": 77.1 },
///   "maxAlternatives": 3,
///   "beta": 0.8,
///   "requested_at": "2024-05-06T08:30:00Z",
///   "candidates": { "type": "tomtom_file", "file": "cp_to_airport.json" }
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisQuery {
    #[serde(flatten)]
    pub request: AnalysisRequest,
    pub candidates: CandidateSource,
    /// time of the analysis. the current time when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<DateTime<Utc>>,
}
