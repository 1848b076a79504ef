use crate::error::DatasetError;
use crate::repository::Dataset;
use core_types::IndexRecord;
use std::path::Path;

/// Parses a JSON array of `{index|name, category, returns, risk}` objects.
pub fn from_json_str(json: &str) -> Result<Dataset, DatasetError> {
    let records: Vec<IndexRecord> = serde_json::from_str(json)?;
    Dataset::from_records(records)
}

/// Reads and validates a dataset file.
pub fn from_json_file(path: &Path) -> Result<Dataset, DatasetError> {
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&json)
}

/// Loads the dataset from `path` when given, otherwise falls back to the embedded one.
pub fn load(path: Option<&Path>) -> Result<Dataset, DatasetError> {
    let dataset = match path {
        Some(path) => {
            let dataset = from_json_file(path)?;
            tracing::info!(path = %path.display(), records = dataset.len(), "Loaded dataset from file.");
            dataset
        }
        None => {
            let dataset = Dataset::embedded();
            tracing::info!(records = dataset.len(), "Using embedded dataset.");
            dataset
        }
    };

    if dataset.is_empty() {
        tracing::warn!("Dataset is empty; every query will return empty results.");
    }
    Ok(dataset)
}
