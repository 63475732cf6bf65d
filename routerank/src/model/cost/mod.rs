mod cost_evaluator;

pub use cost_evaluator::{cost, CostEvaluator};
