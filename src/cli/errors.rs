//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit status.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;
use crate::filter::FilterError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Dataset could not be read or written
    DatasetError,
    /// Argument combination cannot be served
    InvalidArgument,
    /// Requested NEO does not exist
    NotFound,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "NEO_CLI_CONFIG_ERROR",
            Self::IoError => "NEO_CLI_IO_ERROR",
            Self::DatasetError => "NEO_CLI_DATASET_ERROR",
            Self::InvalidArgument => "NEO_CLI_INVALID_ARGUMENT",
            Self::NotFound => "NEO_CLI_NOT_FOUND",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArgument, msg)
    }

    /// No NEO matched the inspect target
    pub fn not_found() -> Self {
        Self::new(
            CliErrorCode::NotFound,
            "No matching NEOs exist in the database.",
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("JSON error: {}", e))
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        match e {
            DatasetError::UnsupportedFormat(_) => Self::invalid_argument(e.to_string()),
            other => Self::new(CliErrorCode::DatasetError, other.to_string()),
        }
    }
}

impl From<FilterError> for CliError {
    fn from(e: FilterError) -> Self {
        Self::invalid_argument(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_code() {
        let err = CliError::not_found();
        assert_eq!(
            err.to_string(),
            "NEO_CLI_NOT_FOUND: No matching NEOs exist in the database."
        );
    }

    #[test]
    fn test_dataset_error_mapping() {
        let err: CliError = DatasetError::UnsupportedFormat("out.txt".into()).into();
        assert_eq!(err.code(), &CliErrorCode::InvalidArgument);

        let err: CliError = DatasetError::MissingField("cd".into()).into();
        assert_eq!(err.code(), &CliErrorCode::DatasetError);
        assert!(err.message().contains("cd"));
    }
}
