mod analysis_query;
mod analyze_ops;
mod candidate_source;

pub use analysis_query::AnalysisQuery;
pub use analyze_ops::{read_queries, run, run_query};
pub use candidate_source::CandidateSource;
