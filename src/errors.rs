//! Error types
//!
//! Only [`FetchError`] stops a pipeline. [`DecodeError`] is advisory and is
//! absorbed by the caller; missing upstream fields are not errors at all.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failure while retrieving the raw schedule
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Network/connection error
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// HTTP error (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Upstream answered with nothing usable
    #[error("Empty response")]
    Empty,
}

/// Why an embedded `?r=` payload could not be decoded
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("URL carries no ?r= payload")]
    NoPayload,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Errors that halt a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Http(503).to_string(), "HTTP error: 503");
        assert_eq!(FetchError::Timeout(10_000).to_string(), "Request timed out after 10000 ms");
        assert_eq!(FetchError::Empty.to_string(), "Empty response");
    }

    #[test]
    fn test_pipeline_error_wraps_fetch() {
        let err: PipelineError = FetchError::Http(404).into();
        assert!(matches!(err, PipelineError::Fetch(FetchError::Http(404))));
        assert_eq!(err.to_string(), "Fetch failed: HTTP error: 404");
    }
}
