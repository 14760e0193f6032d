use std::{io, result};

use thiserror::Error;

/// Error types for paper fetching operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// Caller supplied input that can never produce a request
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Whether this error is a usage error raised before any I/O.
    ///
    /// Validation errors propagate to the caller; every other kind is
    /// absorbed at the network boundary and reported as a degraded result.
    pub fn is_validation(&self) -> bool {
        matches!(self, PubMedError::Validation(_))
    }

    /// Short, human readable category used in diagnostics
    pub fn reason(&self) -> &str {
        match self {
            PubMedError::Validation(_) => "Invalid input",
            PubMedError::RequestError(err) if err.is_timeout() => "Request timeout",
            PubMedError::RequestError(err) if err.is_connect() => "Connection error",
            PubMedError::RequestError(_) => "Network error",
            PubMedError::JsonError(_) => "Invalid JSON response",
            PubMedError::XmlError(_) => "Invalid XML response",
            PubMedError::ApiError { status, .. } => match status {
                429 => "Rate limit exceeded",
                500..=599 => "Server error",
                _ => "API error",
            },
            PubMedError::CsvError(_) => "CSV error",
            PubMedError::IoError(_) => "File system error",
        }
    }
}
