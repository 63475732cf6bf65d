use super::{CongestionModel, FeatureVector, PredictionError, DEFAULT_PREDICTION_BOUNDS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// a linear regression over named features, read from a model artifact.
///
/// # Example
///
/// ```json
/// {
///   "intercept": 0.85,
///   "coefficients": { "hour": 0.01, "delay_s": 0.0004, "rolling_mean_congestion": 0.2 },
///   "bounds": [0.0, 10.0]
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LinearCongestionModel {
    pub intercept: f64,
    pub coefficients: BTreeMap<String, f64>,
    #[serde(default = "default_bounds")]
    pub bounds: (f64, f64),
}

fn default_bounds() -> (f64, f64) {
    DEFAULT_PREDICTION_BOUNDS
}

impl LinearCongestionModel {
    pub fn new(
        intercept: f64,
        coefficients: BTreeMap<String, f64>,
        bounds: (f64, f64),
    ) -> Result<LinearCongestionModel, PredictionError> {
        let model = LinearCongestionModel {
            intercept,
            coefficients,
            bounds,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), PredictionError> {
        let (lo, hi) = self.bounds;
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(PredictionError::ModelFileError(format!(
                "invalid prediction bounds [{lo}, {hi}]"
            )));
        }
        if !self.intercept.is_finite() {
            return Err(PredictionError::ModelFileError(format!(
                "invalid intercept {}",
                self.intercept
            )));
        }
        if let Some((name, c)) = self.coefficients.iter().find(|(_, c)| !c.is_finite()) {
            return Err(PredictionError::ModelFileError(format!(
                "invalid coefficient {c} for feature '{name}'"
            )));
        }
        Ok(())
    }
}

impl CongestionModel for LinearCongestionModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let mut acc = self.intercept;
        for (name, coefficient) in self.coefficients.iter() {
            let x = features
                .get(name)
                .ok_or_else(|| PredictionError::MissingFeature(name.clone()))?;
            acc += coefficient * x;
        }
        Ok(acc)
    }

    fn bounds(&self) -> (f64, f64) {
        self.bounds
    }
}

impl TryFrom<&Path> for LinearCongestionModel {
    type Error = PredictionError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let f = path.to_string_lossy();
        let s = std::fs::read_to_string(path)
            .map_err(|e| PredictionError::ModelFileError(format!("failure reading {f}: {e}")))?;
        let model: LinearCongestionModel = if f.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| {
                PredictionError::ModelFileError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            serde_json::from_str(&s).map_err(|e| {
                PredictionError::ModelFileError(format!("failure decoding {f}: {e}"))
            })?
        };
        model.validate()?;
        Ok(model)
    }
}

#[cfg(test)]
mod test {
    use super::LinearCongestionModel;
    use crate::model::prediction::{
        CongestionModel, FeatureVector, PredictionContext, PredictionError,
    };
    use chrono::{TimeZone, Utc};
    use routerank_core::model::RouteFeatures;
    use std::collections::BTreeMap;

    fn vector() -> FeatureVector {
        let at = Utc.with_ymd_and_hms(2024, 5, 6, 8, 0, 0).unwrap();
        let features = RouteFeatures {
            travel_time_s: 1800.0,
            no_traffic_s: 1200.0,
            delay_s: 600.0,
            length_m: 10000.0,
            length_km: 10.0,
            congestion_ratio: Some(1.5),
        };
        FeatureVector::new(0, &features, &PredictionContext::new(at))
    }

    #[test]
    fn test_linear_prediction() {
        let coefficients = BTreeMap::from([
            (String::from("hour"), 0.05),
            (String::from("delay_s"), 0.001),
        ]);
        let model = LinearCongestionModel::new(1.0, coefficients, (0.0, 10.0))
            .expect("model should be valid");
        let y = model.predict(&vector()).expect("should predict");
        assert!((y - (1.0 + 0.05 * 8.0 + 0.001 * 600.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_feature_is_shape_mismatch() {
        let coefficients = BTreeMap::from([(String::from("rainfall_mm"), 0.3)]);
        let model = LinearCongestionModel::new(1.0, coefficients, (0.0, 10.0))
            .expect("model should be valid");
        let result = model.predict(&vector());
        assert_eq!(
            result,
            Err(PredictionError::MissingFeature(String::from("rainfall_mm")))
        );
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = LinearCongestionModel::new(1.0, BTreeMap::new(), (5.0, 1.0));
        assert!(matches!(result, Err(PredictionError::ModelFileError(_))));
    }

    #[test]
    fn test_read_model_file() {
        let path = std::env::temp_dir().join("routerank_test_linear_model.json");
        std::fs::write(
            &path,
            r#"{"intercept": 0.9, "coefficients": {"delay_s": 0.001}}"#,
        )
        .expect("should write test model");
        let model = LinearCongestionModel::try_from(path.as_path()).expect("should read model");
        assert_eq!(model.intercept, 0.9);
        assert_eq!(model.bounds, (0.0, 10.0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_model_file() {
        let path = std::env::temp_dir().join("routerank_test_no_such_model.json");
        let result = LinearCongestionModel::try_from(path.as_path());
        assert!(matches!(result, Err(PredictionError::ModelFileError(_))));
    }
}
