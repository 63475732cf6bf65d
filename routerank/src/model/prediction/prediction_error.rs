use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("congestion model is not loaded")]
    ModelNotLoaded,
    #[error("congestion model expects feature '{0}' which is not in the feature vector")]
    MissingFeature(String),
    #[error("feature '{name}' has invalid value {value}")]
    InvalidFeature { name: String, value: f64 },
    #[error("congestion model produced invalid output {0}")]
    InvalidOutput(f64),
    #[error("failure loading congestion model: {0}")]
    ModelFileError(String),
}

impl PredictionError {
    /// true when the failure comes from the model itself rather than from
    /// the inputs of a single route, in which case no route in the batch
    /// can be predicted.
    pub fn is_model_failure(&self) -> bool {
        matches!(
            self,
            PredictionError::ModelNotLoaded
                | PredictionError::MissingFeature(_)
                | PredictionError::ModelFileError(_)
        )
    }
}
