//! Error types for the client facade

use pricepred_http::HttpError;
use thiserror::Error;
use tracing::error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the client facade
///
/// Every operation collapses its transport failures (network error, non-2xx
/// status, undecodable body) into a single `RequestFailed` carrying a fixed,
/// operation-specific message. The underlying [`HttpError`] is preserved as
/// the error source so callers can still distinguish failure categories.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An outbound request failed
    #[error("{message}")]
    RequestFailed {
        message: &'static str,
        #[source]
        source: HttpError,
    },
}

impl ApiError {
    /// The fixed, operation-specific message
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::RequestFailed { message, .. } => message,
        }
    }
}

/// Wrap a transport failure in the operation's fixed message, logging the
/// underlying detail on the way
pub(crate) fn request_failed(message: &'static str, source: HttpError) -> ApiError {
    error!("{message}: {source}");
    ApiError::RequestFailed { message, source }
}
