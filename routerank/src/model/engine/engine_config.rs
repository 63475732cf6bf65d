use routerank_core::model::CostWeights;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLLING_WINDOW_DAYS: u32 = 30;

fn default_rolling_window_days() -> u32 {
    DEFAULT_ROLLING_WINDOW_DAYS
}

/// pipeline configuration shared by every analysis of a process.
///
/// # Example
///
/// ```toml
/// congestion_penalty = 0.0
/// model_file = "congestion_model.json"
/// rolling_window_days = 30
///
/// [weights]
/// alpha = 1.0
/// beta = 0.5
/// gamma = 0.001
/// ```
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: CostWeights,
    /// coefficient of the optional congestion term. absent or 0 keeps the
    /// prediction out of the ranking.
    #[serde(default)]
    pub congestion_penalty: Option<f64>,
    /// congestion model artifact. without one, predictions are absent.
    #[serde(default)]
    pub model_file: Option<String>,
    /// history window used for the rolling congestion model inputs.
    #[serde(default = "default_rolling_window_days")]
    pub rolling_window_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: CostWeights::default(),
            congestion_penalty: None,
            model_file: None,
            rolling_window_days: DEFAULT_ROLLING_WINDOW_DAYS,
        }
    }
}

impl TryFrom<&String> for EngineConfig {
    type Error = String;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| format!("failure reading {f}: {e}"))?;
            toml::from_str(&s).map_err(|e| format!("failure decoding {f}: {e}"))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| format!("failure reading {f}: {e}"))?;
            serde_json::from_str(&s).map_err(|e| format!("failure decoding {f}: {e}"))
        } else {
            Err(format!("unsupported file type: {f}"))
        }
    }
}

#[cfg(test)]
mod test {
    use super::EngineConfig;
    use routerank_core::model::CostWeights;

    #[test]
    fn test_decode_toml() {
        let conf: EngineConfig = toml::from_str(
            r#"
            congestion_penalty = 50.0

            [weights]
            alpha = 2.0
            "#,
        )
        .expect("should decode toml");
        assert_eq!(conf.weights, CostWeights { alpha: 2.0, beta: 0.5, gamma: 0.001 });
        assert_eq!(conf.congestion_penalty, Some(50.0));
        assert_eq!(conf.model_file, None);
        assert_eq!(conf.rolling_window_days, 30);
    }

    #[test]
    fn test_empty_config_is_default() {
        let conf: EngineConfig = serde_json::from_str("{}").expect("should decode json");
        assert_eq!(conf, EngineConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = EngineConfig::try_from(&String::from("engine.yaml"));
        assert!(result.is_err());
    }
}
