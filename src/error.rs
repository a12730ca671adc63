//! Error types for the exporter
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Exporter Error Enum ==
/// Unified error type for the exporter.
#[derive(Error, Debug)]
pub enum ExporterError {
    /// Required environment variable is absent or empty
    #[error("Missing required environment variable {0}")]
    MissingEnv(&'static str),

    /// Portal rejected the login form
    #[error("Login failed for user '{0}': portal returned the login page")]
    LoginRejected(String),

    /// Network or HTTP-level failure talking to the portal
    #[error("Portal request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed export, including a missing expected column
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while writing CSV output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transformed output was not valid UTF-8
    #[error("Invalid UTF-8 in CSV output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Numeric cell that could not be parsed
    #[error("Invalid numeric value {value:?} in column '{column}'")]
    InvalidNumber {
        column: &'static str,
        value: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the exporter.
pub type Result<T> = std::result::Result<T, ExporterError>;
