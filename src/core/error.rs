//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`StorageError`] - localStorage / sessionStorage access
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests

use thiserror::Error;

/// Web Storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage area not available (private mode, sandboxed iframe, no window).
    #[error("storage not available")]
    Unavailable,
    /// Reading a key threw.
    #[error("failed to read from storage")]
    ReadFailed,
    /// Failed to serialize data to JSON.
    #[error("failed to serialize value: {0}")]
    SerializationFailed(String),
    /// Writing a key threw (quota exceeded, disabled storage).
    #[error("failed to write to storage")]
    WriteFailed,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}
