//! Dataset error types

use thiserror::Error;

/// Result type for dataset import and export
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while reading or writing dataset files
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value could not be converted to its model type
    #[error("Invalid value in {context}: {reason}")]
    Parse { context: String, reason: String },

    /// A required column is absent from the source
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Output path has no supported extension
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl DatasetError {
    pub fn parse(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            reason: reason.into(),
        }
    }
}
