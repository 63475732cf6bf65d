//! Analysis history and result export.
//!
//! Every scored route of an analysis is stored as one flat
//! [`AnalysisRecord`]. Records of one origin/destination pair share the
//! route id prefix `"{origin}→{destination}"`, so a prefix lookup returns the
//! history of that pair.
mod analysis_record;
mod analysis_store;
mod csv_store;
mod in_memory_store;
mod persistence_error;
mod result_export;

pub use analysis_record::AnalysisRecord;
pub use analysis_store::AnalysisStore;
pub use csv_store::CsvAnalysisStore;
pub use in_memory_store::InMemoryAnalysisStore;
pub use persistence_error::PersistenceError;
pub use result_export::{export_rows, write_results_csv};
