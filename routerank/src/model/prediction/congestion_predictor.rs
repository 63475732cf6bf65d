use super::{CongestionModel, FeatureVector, PredictionContext, PredictionError};
use routerank_core::model::{CongestionPrediction, RouteFeatures};
use std::sync::Arc;

/// maps route features to a congestion prediction using a shared model
/// handle. stateless given the handle, safe to call from many threads.
#[derive(Clone)]
pub struct CongestionPredictor {
    model: Option<Arc<dyn CongestionModel>>,
}

impl CongestionPredictor {
    pub fn new(model: Arc<dyn CongestionModel>) -> CongestionPredictor {
        CongestionPredictor { model: Some(model) }
    }

    /// a predictor with no model loaded. every prediction is absent.
    pub fn unavailable() -> CongestionPredictor {
        CongestionPredictor { model: None }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// runs the model for one route, clamping its output into the model's
    /// documented bounds.
    pub fn try_predict(
        &self,
        route_index: usize,
        features: &RouteFeatures,
        context: &PredictionContext,
    ) -> Result<f64, PredictionError> {
        let model = self.model.as_ref().ok_or(PredictionError::ModelNotLoaded)?;
        let vector = FeatureVector::new(route_index, features, context);
        vector.validate()?;
        let raw = model.predict(&vector)?;
        if !raw.is_finite() {
            return Err(PredictionError::InvalidOutput(raw));
        }
        let (lo, hi) = model.bounds();
        Ok(raw.clamp(lo, hi))
    }

    /// prediction for one route. failures become an absent prediction.
    pub fn predict(
        &self,
        route_index: usize,
        features: &RouteFeatures,
        context: &PredictionContext,
    ) -> CongestionPrediction {
        match self.try_predict(route_index, features, context) {
            Ok(value) => CongestionPrediction::predicted(value),
            Err(e) => {
                log::debug!("route {route_index}: congestion prediction absent: {e}");
                CongestionPrediction::absent()
            }
        }
    }

    /// predictions for a batch of routes, indexed by position. a model level
    /// failure (no model, shape mismatch) blanks the whole batch and is
    /// logged once. an invalid input row only blanks its own route.
    pub fn predict_batch(
        &self,
        features: &[RouteFeatures],
        context: &PredictionContext,
    ) -> Vec<CongestionPrediction> {
        let absent = || vec![CongestionPrediction::absent(); features.len()];
        if !self.is_available() {
            if !features.is_empty() {
                log::warn!(
                    "congestion model unavailable, ml_predicted_congestion omitted for {} routes",
                    features.len()
                );
            }
            return absent();
        }
        let mut predictions = Vec::with_capacity(features.len());
        for (route_index, f) in features.iter().enumerate() {
            match self.try_predict(route_index, f, context) {
                Ok(value) => predictions.push(CongestionPrediction::predicted(value)),
                Err(e) if e.is_model_failure() => {
                    log::warn!(
                        "congestion model failed, ml_predicted_congestion omitted for {} routes: {e}",
                        features.len()
                    );
                    return absent();
                }
                Err(e) => {
                    log::debug!("route {route_index}: congestion prediction absent: {e}");
                    predictions.push(CongestionPrediction::absent());
                }
            }
        }
        predictions
    }
}

impl std::fmt::Debug for CongestionPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CongestionPredictor")
            .field("available", &self.is_available())
            .finish()
    }
}
