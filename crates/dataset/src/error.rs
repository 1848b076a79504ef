use core_types::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Duplicate index name in dataset: {0}")]
    DuplicateName(String),

    #[error("Invalid record in dataset: {0}")]
    InvalidRecord(#[from] CoreError),
}
