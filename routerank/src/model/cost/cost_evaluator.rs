use routerank_core::model::{
    validate_weight, CongestionPrediction, ConfigurationError, CostWeights, RouteFeatures,
};

/// weighted sum cost of a route
///
/// `cost = alpha * travel_time_s + beta * delay_s + gamma * length_m`
///
/// monotonically non-decreasing in each term for non-negative weights.
pub fn cost(features: &RouteFeatures, weights: &CostWeights) -> f64 {
    weights.alpha * features.travel_time_s
        + weights.beta * features.delay_s
        + weights.gamma * features.length_m
}

/// computes route costs for one analysis with validated weights.
///
/// the predicted congestion only enters the cost when a positive
/// congestion penalty (delta) is configured:
/// `cost += delta * ml_predicted_congestion`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostEvaluator {
    weights: CostWeights,
    congestion_penalty: f64,
}

impl CostEvaluator {
    pub fn new(
        weights: CostWeights,
        congestion_penalty: Option<f64>,
    ) -> Result<CostEvaluator, ConfigurationError> {
        weights.validate()?;
        let congestion_penalty = congestion_penalty.unwrap_or_default();
        validate_weight("congestion_penalty", congestion_penalty)?;
        Ok(CostEvaluator {
            weights,
            congestion_penalty,
        })
    }

    pub fn weights(&self) -> &CostWeights {
        &self.weights
    }

    pub fn congestion_penalty(&self) -> f64 {
        self.congestion_penalty
    }

    pub fn evaluate(&self, features: &RouteFeatures, prediction: &CongestionPrediction) -> f64 {
        let base = cost(features, &self.weights);
        match prediction.value() {
            Some(congestion) if self.congestion_penalty > 0.0 => {
                base + self.congestion_penalty * congestion
            }
            _ => base,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{cost, CostEvaluator};
    use routerank_core::model::{
        CongestionPrediction, ConfigurationError, CostWeights, RouteFeatures,
    };

    fn features(travel_time_s: f64, delay_s: f64, length_m: f64) -> RouteFeatures {
        RouteFeatures {
            travel_time_s,
            no_traffic_s: travel_time_s - delay_s,
            delay_s,
            length_m,
            length_km: length_m / 1000.0,
            congestion_ratio: None,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_weights_formula() {
        let w = CostWeights::default();
        assert!(approx(cost(&features(1800.0, 600.0, 10000.0), &w), 2110.0));
        assert!(approx(cost(&features(2000.0, 100.0, 8000.0), &w), 2058.0));
        assert!(approx(cost(&features(1500.0, 0.0, 15000.0), &w), 1515.0));
    }

    #[test]
    fn test_monotone_in_each_term() {
        let w = CostWeights::new(0.7, 0.2, 0.003).expect("weights should be valid");
        let base = cost(&features(1000.0, 100.0, 5000.0), &w);
        for (dt, dd, dl) in [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)] {
            let bumped = cost(&features(1000.0 + dt, 100.0 + dd, 5000.0 + dl), &w);
            assert!(bumped >= base, "cost decreased for bump ({dt}, {dd}, {dl})");
        }
        let zero = CostWeights::new(0.0, 0.0, 0.0).expect("zero weights are valid");
        assert_eq!(cost(&features(1000.0, 100.0, 5000.0), &zero), 0.0);
    }

    #[test]
    fn test_prediction_ignored_without_penalty() {
        let e = CostEvaluator::new(CostWeights::default(), None).expect("valid evaluator");
        let f = features(1500.0, 0.0, 15000.0);
        let with = e.evaluate(&f, &CongestionPrediction::predicted(3.0));
        let without = e.evaluate(&f, &CongestionPrediction::absent());
        assert_eq!(with, without);
    }

    #[test]
    fn test_congestion_penalty_term() {
        let e = CostEvaluator::new(CostWeights::default(), Some(100.0)).expect("valid evaluator");
        let f = features(1500.0, 0.0, 15000.0);
        assert!(approx(
            e.evaluate(&f, &CongestionPrediction::predicted(1.2)),
            1515.0 + 120.0
        ));
        assert!(approx(e.evaluate(&f, &CongestionPrediction::absent()), 1515.0));
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let result = CostEvaluator::new(CostWeights::default(), Some(-1.0));
        assert!(matches!(
            result,
            Err(ConfigurationError::NegativeWeight { .. })
        ));
    }
}
