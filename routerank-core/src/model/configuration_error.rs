use thiserror::Error;

/// a request or pipeline configuration that must be rejected before scoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("cost weight '{name}' must be non-negative, found {value}")]
    NegativeWeight { name: String, value: f64 },
    #[error("cost weight '{name}' must be a finite number, found {value}")]
    NonFiniteWeight { name: String, value: f64 },
    #[error("maxAlternatives must be at least 1, found {0}")]
    InvalidMaxAlternatives(i64),
}
