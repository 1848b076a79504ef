use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Index not found: {0}")]
    NotFound(String),
}
