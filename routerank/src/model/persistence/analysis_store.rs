use super::{AnalysisRecord, PersistenceError};
use routerank_core::model::AnalysisResult;

/// append-only history of analyzed routes.
pub trait AnalysisStore: Send + Sync {
    /// appends records to the history.
    fn save(&self, records: &[AnalysisRecord]) -> Result<(), PersistenceError>;

    /// all records of `route_id`, in insertion order. passing an
    /// origin/destination route id returns every route of every analysis of
    /// that pair, see [`AnalysisRecord::matches_route`].
    fn find_by_route_id(&self, route_id: &str) -> Result<Vec<AnalysisRecord>, PersistenceError>;

    /// stores every scored route of a result, returning the number of
    /// records written.
    fn save_result(&self, result: &AnalysisResult) -> Result<usize, PersistenceError> {
        let records = AnalysisRecord::from_result(result);
        self.save(&records)?;
        Ok(records.len())
    }
}
