use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("error opening {}: {}", .path.display(), .source)]
    Open {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("error decoding location history: {0}")]
    Json(#[from] serde_json::Error),

    /// Aborts the whole decode: one bad record poisons the file.
    #[error("error parsing time {value:?} of record {index}")]
    Timestamp { index: usize, value: String },

    #[error("record {index} has no timestamp")]
    MissingTimestamp { index: usize },

    #[error("cache error: {0}")]
    Cache(#[from] csv::Error),

    #[error("cache row {row} has out-of-range time {unix_secs}")]
    CacheTime { row: usize, unix_secs: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HistoryResult<T> = Result<T, HistoryError>;
