use routerank_core::model::ConfigurationError;
use thiserror::Error;

/// failures that reject an analysis request before scoring. degenerate
/// candidates and predictor failures are never reported here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid analysis configuration: {source}")]
    ConfigurationError {
        #[from]
        source: ConfigurationError,
    },
}
