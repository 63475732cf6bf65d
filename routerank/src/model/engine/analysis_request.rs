use routerank_core::model::{ConfigurationError, CostWeights, LocationRef};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ALTERNATIVES: i64 = 3;

fn default_max_alternatives() -> i64 {
    DEFAULT_MAX_ALTERNATIVES
}

/// parameters of one route analysis. weights left out of the request fall
/// back to the configured defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisRequest {
    pub origin: LocationRef,
    pub destination: LocationRef,
    #[serde(rename = "maxAlternatives", default = "default_max_alternatives")]
    pub max_alternatives: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
}

impl AnalysisRequest {
    pub fn new(origin: LocationRef, destination: LocationRef) -> AnalysisRequest {
        AnalysisRequest {
            origin,
            destination,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            alpha: None,
            beta: None,
            gamma: None,
        }
    }

    pub fn with_weights(mut self, alpha: f64, beta: f64, gamma: f64) -> AnalysisRequest {
        self.alpha = Some(alpha);
        self.beta = Some(beta);
        self.gamma = Some(gamma);
        self
    }

    /// resolves and validates the request parameters against the defaults.
    pub fn validate(&self, defaults: &CostWeights) -> Result<CostWeights, ConfigurationError> {
        if self.max_alternatives < 1 {
            return Err(ConfigurationError::InvalidMaxAlternatives(
                self.max_alternatives,
            ));
        }
        let weights = defaults.with_overrides(self.alpha, self.beta, self.gamma);
        weights.validate()?;
        Ok(weights)
    }
}
