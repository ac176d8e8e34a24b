use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IbError {
    #[error("Bucket key '{0}' not supported (use 'general' or 'today')")]
    UnknownBucket(String),

    #[error("Item id '{0}' not found")]
    ItemNotFound(i64),

    #[error("Item id sequence exhausted at {0}; compact ids to reuse them")]
    SequenceExhausted(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file {}: {reason}", path.display())]
    CorruptState { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl IbError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        IbError::CorruptState {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IbError>;
