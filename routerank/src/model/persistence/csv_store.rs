use super::{AnalysisRecord, AnalysisStore, PersistenceError};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// history persisted as an append-only CSV file with one row per
/// [`AnalysisRecord`]. the header row is written when the file is created.
/// route geometry is not stored.
#[derive(Debug)]
pub struct CsvAnalysisStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvAnalysisStore {
    pub fn new(path: &Path) -> CsvAnalysisStore {
        CsvAnalysisStore {
            path: path.to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    /// every record in the file, in file order. a missing file is an empty history.
    pub fn read_all(&self) -> Result<Vec<AnalysisRecord>, PersistenceError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| PersistenceError::LockError(e.to_string()))?;
        self.read_unlocked()
    }

    fn read_unlocked(&self) -> Result<Vec<AnalysisRecord>, PersistenceError> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let records = reader
            .deserialize::<AnalysisRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

impl AnalysisStore for CsvAnalysisStore {
    fn save(&self, records: &[AnalysisRecord]) -> Result<(), PersistenceError> {
        if records.is_empty() {
            return Ok(());
        }
        let _guard = self
            .lock
            .lock()
            .map_err(|e| PersistenceError::LockError(e.to_string()))?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PersistenceError::FileError(self.path_string(), e))?;
        let is_new = file
            .metadata()
            .map_err(|e| PersistenceError::FileError(self.path_string(), e))?
            .len()
            == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        for record in records.iter() {
            writer.serialize(record)?;
        }
        writer
            .flush()
            .map_err(|e| PersistenceError::FileError(self.path_string(), e))?;
        log::debug!(
            "appended {} records to {}",
            records.len(),
            self.path_string()
        );
        Ok(())
    }

    fn find_by_route_id(&self, route_id: &str) -> Result<Vec<AnalysisRecord>, PersistenceError> {
        let records = self.read_all()?;
        Ok(records
            .into_iter()
            .filter(|r| r.matches_route(route_id))
            .collect())
    }
}
