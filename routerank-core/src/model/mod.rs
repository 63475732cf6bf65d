mod analysis_result;
mod analysis_status;
mod configuration_error;
mod congestion_prediction;
mod cost_weights;
mod degenerate_input_warning;
mod location_ref;
mod route_candidate;
pub mod route_field;
mod route_features;
mod scored_route;

pub use analysis_result::AnalysisResult;
pub use analysis_status::AnalysisStatus;
pub use configuration_error::ConfigurationError;
pub use congestion_prediction::CongestionPrediction;
pub use cost_weights::{validate_weight, CostWeights};
pub use degenerate_input_warning::DegenerateInputWarning;
pub use location_ref::LocationRef;
pub use route_candidate::RouteCandidate;
pub use route_features::RouteFeatures;
pub use scored_route::ScoredRoute;
