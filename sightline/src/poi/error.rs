//! Error types for the points-of-interest provider.

use thiserror::Error;

/// Errors that can occur while querying the points-of-interest provider.
///
/// All variants are fatal for the request that triggered them; there is no
/// silent-empty fallback path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, TLS, read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider responded with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider responded with something other than JSON.
    #[error("expected JSON response, got {content_type}")]
    NotJson { content_type: String },

    /// The JSON payload did not match the expected shape.
    #[error("failed to parse provider response: {0}")]
    Parse(String),
}
