//! Conversion of TomTom routing responses into [`RouteCandidate`]s.
//!
//! [`RouteCandidate`]: routerank_core::model::RouteCandidate
mod polyline;
mod provider_error;
mod tomtom_ops;
mod tomtom_response;

pub use polyline::decode_polyline;
pub use provider_error::ProviderError;
pub use tomtom_ops::{candidate_from_route, candidates_from_response, read_response_file};
pub use tomtom_response::{
    LegPoints, TomTomGuidance, TomTomInstruction, TomTomLeg, TomTomResponse, TomTomRoute,
    TomTomSummary,
};
