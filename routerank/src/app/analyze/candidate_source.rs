use crate::model::provider::{self, ProviderError};
use routerank_core::model::{LocationRef, RouteCandidate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// where the candidate routes of a query come from.
///
/// # Examples
///
/// ```json
/// { "type": "inline", "routes": [{ "travel_time_s": 1800, "no_traffic_s": 1200, "length_m": 10000 }] }
/// { "type": "tomtom_file", "file": "responses/cp_to_airport.json" }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CandidateSource {
    Inline { routes: Vec<RouteCandidate> },
    TomtomFile { file: String },
}

impl CandidateSource {
    pub fn candidates(
        &self,
        origin: &LocationRef,
        destination: &LocationRef,
    ) -> Result<Vec<RouteCandidate>, ProviderError> {
        match self {
            CandidateSource::Inline { routes } => Ok(routes.clone()),
            CandidateSource::TomtomFile { file } => {
                let response = provider::read_response_file(Path::new(file))?;
                Ok(provider::candidates_from_response(
                    &response,
                    origin,
                    destination,
                ))
            }
        }
    }
}
