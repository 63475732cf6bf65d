pub mod analytics;
pub mod assembly;
pub mod cost;
pub mod engine;
pub mod feature;
pub mod persistence;
pub mod prediction;
pub mod provider;
pub mod selection;
