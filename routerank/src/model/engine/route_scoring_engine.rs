use super::{AnalysisRequest, EngineConfig, EngineError};
use crate::model::assembly::assemble;
use crate::model::cost::CostEvaluator;
use crate::model::feature::extract_with_warnings;
use crate::model::prediction::{CongestionPredictor, LinearCongestionModel, PredictionContext};
use crate::model::selection::select;
use itertools::Itertools;
use routerank_core::model::{
    AnalysisResult, CostWeights, DegenerateInputWarning, RouteCandidate, ScoredRoute,
};
use std::path::Path;
use std::sync::Arc;

/// ranks candidate routes between an origin and a destination.
///
/// synchronous and stateless per call: the only shared state is the
/// read-only congestion model handle, so one engine can serve concurrent
/// analyses.
///
/// pipeline: features -> congestion prediction -> cost -> selection -> assembly
#[derive(Clone, Debug)]
pub struct RouteScoringEngine {
    default_weights: CostWeights,
    congestion_penalty: Option<f64>,
    predictor: CongestionPredictor,
}

impl RouteScoringEngine {
    pub fn new(
        default_weights: CostWeights,
        congestion_penalty: Option<f64>,
        predictor: CongestionPredictor,
    ) -> Result<RouteScoringEngine, EngineError> {
        // rejects bad defaults at construction rather than on every request
        let _ = CostEvaluator::new(default_weights, congestion_penalty)?;
        Ok(RouteScoringEngine {
            default_weights,
            congestion_penalty,
            predictor,
        })
    }

    pub fn default_weights(&self) -> &CostWeights {
        &self.default_weights
    }

    pub fn predictor(&self) -> &CongestionPredictor {
        &self.predictor
    }

    /// runs a full analysis.
    ///
    /// # Arguments
    ///
    /// * `request`    - origin, destination and weights of this analysis
    /// * `candidates` - provider routes in provider order
    /// * `context`    - request time signals for the congestion model
    ///
    /// # Returns
    ///
    /// * a ranked result holding every candidate, or a "no routes found"
    ///   result for an empty candidate set. only an invalid request fails.
    pub fn analyze(
        &self,
        request: &AnalysisRequest,
        candidates: &[RouteCandidate],
        context: &PredictionContext,
    ) -> Result<AnalysisResult, EngineError> {
        let weights = request.validate(&self.default_weights)?;
        let evaluator = CostEvaluator::new(weights, self.congestion_penalty)?;
        log::debug!(
            "analyzing {} candidates for {}→{} with weights {:?}",
            candidates.len(),
            request.origin,
            request.destination,
            weights
        );
        if candidates.is_empty() {
            log::info!(
                "no routes found for {}→{}",
                request.origin,
                request.destination
            );
        }
        let (scored, warnings) = self.score(&evaluator, candidates, context);
        let selection = select(scored);
        Ok(assemble(
            request.origin.clone(),
            request.destination.clone(),
            selection,
            context.requested_at,
            warnings,
        ))
    }

    /// scores every candidate in provider order. route_index is the
    /// candidate's position in `candidates`.
    pub fn score(
        &self,
        evaluator: &CostEvaluator,
        candidates: &[RouteCandidate],
        context: &PredictionContext,
    ) -> (Vec<ScoredRoute>, Vec<DegenerateInputWarning>) {
        let (features, warnings): (Vec<_>, Vec<_>) = candidates
            .iter()
            .enumerate()
            .map(|(route_index, c)| extract_with_warnings(route_index, c))
            .unzip();
        let warnings = warnings.into_iter().flatten().collect_vec();
        for w in warnings.iter() {
            log::warn!("degenerate route input: {w}");
        }

        let predictions = self.predictor.predict_batch(&features, context);

        let scored = candidates
            .iter()
            .zip(features.iter())
            .zip(predictions)
            .enumerate()
            .map(|(route_index, ((candidate, f), prediction))| {
                let calculated_cost = evaluator.evaluate(f, &prediction);
                ScoredRoute::new(
                    route_index,
                    f,
                    calculated_cost,
                    prediction,
                    candidate.geometry.clone(),
                )
            })
            .collect_vec();
        (scored, warnings)
    }
}

impl TryFrom<&EngineConfig> for RouteScoringEngine {
    type Error = EngineError;

    /// builds an engine from configuration. a model artifact that cannot be
    /// loaded leaves the predictor unavailable instead of failing.
    fn try_from(config: &EngineConfig) -> Result<Self, Self::Error> {
        let predictor = match &config.model_file {
            None => {
                log::info!("no congestion model configured, predictions will be absent");
                CongestionPredictor::unavailable()
            }
            Some(f) => match LinearCongestionModel::try_from(Path::new(f)) {
                Ok(model) => {
                    log::info!("loaded congestion model from {f}");
                    CongestionPredictor::new(Arc::new(model))
                }
                Err(e) => {
                    log::warn!("congestion model unavailable: {e}");
                    CongestionPredictor::unavailable()
                }
            },
        };
        RouteScoringEngine::new(config.weights, config.congestion_penalty, predictor)
    }
}

#[cfg(test)]
mod test {
    use super::RouteScoringEngine;
    use crate::model::engine::{AnalysisRequest, EngineConfig, EngineError};
    use crate::model::prediction::{
        CongestionModel, CongestionPredictor, FeatureVector, PredictionContext, PredictionError,
    };
    use chrono::{TimeZone, Utc};
    use itertools::Itertools;
    use routerank_core::model::{
        AnalysisStatus, ConfigurationError, CostWeights, DegenerateInputWarning, LocationRef,
        RouteCandidate,
    };
    use std::sync::Arc;

    /// predicts the congestion ratio implied by the route's own times.
    struct RatioModel;

    impl CongestionModel for RatioModel {
        fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
            let t = features
                .get("travel_time_s")
                .ok_or_else(|| PredictionError::MissingFeature(String::from("travel_time_s")))?;
            let n = features
                .get("no_traffic_s")
                .ok_or_else(|| PredictionError::MissingFeature(String::from("no_traffic_s")))?;
            Ok(t / n)
        }
    }

    fn context() -> PredictionContext {
        PredictionContext::new(Utc.with_ymd_and_hms(2024, 5, 6, 8, 30, 0).unwrap())
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            LocationRef::Named(String::from("Connaught Place")),
            LocationRef::Coordinate { lat: 28.5562, lon: 77.1 },
        )
        .with_weights(1.0, 0.5, 0.001)
    }

    fn scenario_a() -> Vec<RouteCandidate> {
        vec![
            RouteCandidate::new(1800.0, 1200.0, 10000.0),
            RouteCandidate::new(2000.0, 1900.0, 8000.0),
            RouteCandidate::new(1500.0, 1500.0, 15000.0),
        ]
    }

    fn engine(predictor: CongestionPredictor) -> RouteScoringEngine {
        RouteScoringEngine::new(CostWeights::default(), None, predictor)
            .expect("engine should build")
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_scenario_a_costs_and_best_route() {
        let e = engine(CongestionPredictor::new(Arc::new(RatioModel)));
        let result = e
            .analyze(&request(), &scenario_a(), &context())
            .expect("analysis should succeed");
        assert_eq!(result.status, AnalysisStatus::Ranked);
        assert_eq!(result.best_route_index, Some(2));
        let order = result
            .analyzed_routes
            .iter()
            .map(|r| r.route_index)
            .collect_vec();
        assert_eq!(order, vec![2, 1, 0]);
        let cost = |idx: usize| {
            result
                .route(idx)
                .unwrap_or_else(|| panic!("route {idx} missing"))
                .calculated_cost
        };
        assert!(approx(cost(0), 2110.0));
        assert!(approx(cost(1), 2058.0));
        assert!(approx(cost(2), 1515.0));
        let best = result.best_route().expect("should have a best route");
        assert_eq!(best.delay_s, 0.0);
        assert_eq!(best.congestion_ratio, Some(1.0));
        assert_eq!(best.ml_predicted_congestion.value(), Some(1.0));
        assert_eq!(result.route_id, "Connaught Place→28.5562,77.1");
    }

    #[test]
    fn test_scenario_b_predictor_unavailable() {
        let with_model = engine(CongestionPredictor::new(Arc::new(RatioModel)))
            .analyze(&request(), &scenario_a(), &context())
            .expect("analysis should succeed");
        let without_model = engine(CongestionPredictor::unavailable())
            .analyze(&request(), &scenario_a(), &context())
            .expect("analysis should succeed");
        assert!(without_model
            .analyzed_routes
            .iter()
            .all(|r| r.ml_predicted_congestion.is_absent()));
        let ranking = |r: &routerank_core::model::AnalysisResult| {
            r.analyzed_routes
                .iter()
                .map(|s| (s.route_index, s.calculated_cost))
                .collect_vec()
        };
        assert_eq!(ranking(&with_model), ranking(&without_model));
        assert_eq!(with_model.best_route_index, without_model.best_route_index);
    }

    #[test]
    fn test_scenario_c_zero_free_flow_time() {
        let candidates = vec![
            RouteCandidate::new(1800.0, 1200.0, 10000.0),
            RouteCandidate::new(1700.0, 0.0, 9000.0).with_provider_delay(90.0),
        ];
        let result = engine(CongestionPredictor::unavailable())
            .analyze(&request(), &candidates, &context())
            .expect("analysis should succeed");
        let degenerate = result.route(1).expect("route 1 should be present");
        assert_eq!(degenerate.congestion_ratio, None);
        assert_eq!(degenerate.delay_s, 90.0);
        assert!(approx(degenerate.calculated_cost, 1700.0 + 45.0 + 9.0));
        assert_eq!(result.analyzed_routes.len(), 2);
    }

    #[test]
    fn test_scenario_d_no_candidates() {
        let result = engine(CongestionPredictor::new(Arc::new(RatioModel)))
            .analyze(&request(), &[], &context())
            .expect("empty candidate set should not fail");
        assert_eq!(result.status, AnalysisStatus::NoRoutesFound);
        assert!(result.analyzed_routes.is_empty());
        assert_eq!(result.best_route_index, None);
    }

    #[test]
    fn test_degenerate_candidate_does_not_sink_batch() {
        let candidates = vec![
            RouteCandidate {
                geometry: vec![],
                travel_time_s: Some(1200.0),
                no_traffic_s: None,
                length_m: None,
                delay_s: None,
            },
            RouteCandidate::new(1500.0, 1500.0, 15000.0),
        ];
        let result = engine(CongestionPredictor::unavailable())
            .analyze(&request(), &candidates, &context())
            .expect("analysis should succeed");
        assert_eq!(result.analyzed_routes.len(), 2);
        assert_eq!(result.best_route_index, Some(0));
        assert!(result
            .warnings
            .contains(&DegenerateInputWarning::MissingLength { route_index: 0 }));
    }

    #[test]
    fn test_idempotent() {
        let e = engine(CongestionPredictor::new(Arc::new(RatioModel)));
        let first = e
            .analyze(&request(), &scenario_a(), &context())
            .expect("analysis should succeed");
        let second = e
            .analyze(&request(), &scenario_a(), &context())
            .expect("analysis should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_route_index_follows_input_order() {
        let mut reversed = scenario_a();
        reversed.reverse();
        let result = engine(CongestionPredictor::unavailable())
            .analyze(&request(), &reversed, &context())
            .expect("analysis should succeed");
        // the cheapest candidate is now first in provider order
        assert_eq!(result.best_route_index, Some(0));
        assert!(approx(
            result.route(0).expect("route 0").calculated_cost,
            1515.0
        ));
    }

    #[test]
    fn test_invalid_request_rejected_before_scoring() {
        let req = request().with_weights(1.0, -0.5, 0.001);
        let result = engine(CongestionPredictor::unavailable()).analyze(
            &req,
            &scenario_a(),
            &context(),
        );
        match result {
            Err(EngineError::ConfigurationError {
                source: ConfigurationError::NegativeWeight { name, .. },
            }) => assert_eq!(name, "beta"),
            other => panic!("expected configuration error, found {other:?}"),
        }
    }

    #[test]
    fn test_congestion_penalty_changes_ranking() {
        let candidates = vec![
            RouteCandidate::new(1000.0, 900.0, 1000.0),
            RouteCandidate::new(1100.0, 1100.0, 1000.0),
        ];
        let plain = engine(CongestionPredictor::new(Arc::new(RatioModel)))
            .analyze(&request(), &candidates, &context())
            .expect("analysis should succeed");
        assert_eq!(plain.best_route_index, Some(0));
        assert!(approx(
            plain.route(0).expect("route 0").calculated_cost,
            1000.0 + 50.0 + 1.0
        ));

        let penalized = RouteScoringEngine::new(
            CostWeights::default(),
            Some(1000.0),
            CongestionPredictor::new(Arc::new(RatioModel)),
        )
        .expect("engine should build")
        .analyze(&request(), &candidates, &context())
        .expect("analysis should succeed");
        assert_eq!(penalized.best_route_index, Some(1));
        assert!(approx(
            penalized.route(1).expect("route 1").calculated_cost,
            1100.0 + 1.0 + 1000.0
        ));
    }

    #[test]
    fn test_missing_model_file_leaves_predictor_unavailable() {
        let conf = EngineConfig {
            model_file: Some(String::from("/nonexistent/routerank/model.json")),
            ..Default::default()
        };
        let e = RouteScoringEngine::try_from(&conf).expect("engine should still build");
        assert!(!e.predictor().is_available());
    }

    #[test]
    fn test_concurrent_analyses() {
        let e = engine(CongestionPredictor::new(Arc::new(RatioModel)));
        let expected = e
            .analyze(&request(), &scenario_a(), &context())
            .expect("analysis should succeed");
        std::thread::scope(|s| {
            let handles = (0..8)
                .map(|_| s.spawn(|| e.analyze(&request(), &scenario_a(), &context())))
                .collect_vec();
            for h in handles {
                let result = h
                    .join()
                    .expect("thread should not panic")
                    .expect("analysis should succeed");
                assert_eq!(result, expected);
            }
        });
    }
}
