use crate::model::engine::EngineError;
use crate::model::persistence::PersistenceError;
use crate::model::provider::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading query file {0}: {1}")]
    QueryFileError(String, String),
    #[error("failure writing output file {0}: {1}")]
    OutputFileError(String, std::io::Error),
    #[error("route analysis failed: {source}")]
    EngineError {
        #[from]
        source: EngineError,
    },
    #[error("failure reading route candidates: {source}")]
    ProviderError {
        #[from]
        source: ProviderError,
    },
    #[error("failure accessing analysis history: {source}")]
    PersistenceError {
        #[from]
        source: PersistenceError,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure building thread pool: {source}")]
    ThreadPoolError {
        #[from]
        source: rayon::ThreadPoolBuildError,
    },
    #[error("progress bar error: {0}")]
    ProgressBarError(String),
}
