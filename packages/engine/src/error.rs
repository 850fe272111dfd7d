//! Typed errors for the query engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while answering a query.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No criteria could be extracted from the query text.
    ///
    /// User-correctable: the query mentioned no known location,
    /// property type, or price phrase. Raised before the filter
    /// runs; an empty filter result is NOT an error.
    #[error("no search criteria found in query")]
    InvalidQuery,

    /// Dataset could not be loaded or parsed.
    #[error("dataset error: {0}")]
    Dataset(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EngineError {
    pub(crate) fn dataset(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Dataset(Box::new(err))
    }
}

/// Errors from the external advisory gateway.
///
/// These never reach the caller of [`crate::QueryService::query`]:
/// the service substitutes a fixed fallback suggestion on any
/// advisory failure.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// HTTP transport failed (connect, TLS, timeout).
    #[error("advisory network error: {0}")]
    Network(String),

    /// Provider returned a non-success status.
    #[error("advisory API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Provider answered but produced no usable text.
    #[error("advisory response contained no completion")]
    EmptyCompletion,

    /// No advisor is configured for this deployment.
    #[error("advisory gateway not configured")]
    NotConfigured,
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type alias for advisory operations.
pub type AdvisoryResult<T> = std::result::Result<T, AdvisoryError>;
