//! Adapter around a trained congestion regression model.
//!
//! The model is loaded once and shared read-only between analyses. Any
//! failure inside the adapter turns into an absent prediction, never an
//! error for the analysis.
mod congestion_model;
mod congestion_predictor;
mod feature_vector;
mod linear_congestion_model;
mod prediction_context;
mod prediction_error;

pub use congestion_model::{CongestionModel, DEFAULT_PREDICTION_BOUNDS};
pub use congestion_predictor::CongestionPredictor;
pub use feature_vector::{FeatureVector, FEATURE_NAMES};
pub use linear_congestion_model::LinearCongestionModel;
pub use prediction_context::PredictionContext;
pub use prediction_error::PredictionError;
