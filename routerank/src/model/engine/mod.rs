mod analysis_request;
mod engine_config;
mod engine_error;
mod route_scoring_engine;

pub use analysis_request::{AnalysisRequest, DEFAULT_MAX_ALTERNATIVES};
pub use engine_config::EngineConfig;
pub use engine_error::EngineError;
pub use route_scoring_engine::RouteScoringEngine;
