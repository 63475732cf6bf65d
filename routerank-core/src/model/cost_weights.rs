use super::ConfigurationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 0.5;
pub const DEFAULT_GAMMA: f64 = 0.001;

/// weights of the route cost function
///
/// `cost = alpha * travel_time_s + beta * delay_s + gamma * length_m`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CostWeights {
    /// weight of travel time (per second)
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// weight of traffic delay (per second)
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// weight of distance (per meter)
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_beta() -> f64 {
    DEFAULT_BETA
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl CostWeights {
    /// builds a validated set of weights.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<CostWeights, ConfigurationError> {
        let weights = CostWeights { alpha, beta, gamma };
        weights.validate()?;
        Ok(weights)
    }

    /// overrides any of the weights, keeping the others.
    pub fn with_overrides(
        &self,
        alpha: Option<f64>,
        beta: Option<f64>,
        gamma: Option<f64>,
    ) -> CostWeights {
        CostWeights {
            alpha: alpha.unwrap_or(self.alpha),
            beta: beta.unwrap_or(self.beta),
            gamma: gamma.unwrap_or(self.gamma),
        }
    }

    /// all weights must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            validate_weight(name, value)?;
        }
        Ok(())
    }
}

/// checks a single cost coefficient.
pub fn validate_weight(name: &str, value: f64) -> Result<(), ConfigurationError> {
    if !value.is_finite() {
        Err(ConfigurationError::NonFiniteWeight {
            name: name.to_string(),
            value,
        })
    } else if value < 0.0 {
        Err(ConfigurationError::NegativeWeight {
            name: name.to_string(),
            value,
        })
    } else {
        Ok(())
    }
}
