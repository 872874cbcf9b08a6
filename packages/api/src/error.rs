//! Error types for the dashboard API client.

use thiserror::Error;

/// Errors that can occur when talking to the dashboard backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
