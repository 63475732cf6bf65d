use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failure accessing history file {0}: {1}")]
    FileError(String, std::io::Error),
    #[error("failure reading or writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("history store lock poisoned: {0}")]
    LockError(String),
}
