//! Error types for data resolution
//!
//! The renderer itself is infallible; errors only arise when the hosting
//! application's data layer fails to produce a record, and those stop at the
//! boundary resolvers.

use thiserror::Error;

/// Data source error types
#[derive(Debug, Error)]
pub enum SourceError {
    /// Record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend failure while loading a record
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for data source operations
pub type SourceResult<T> = Result<T, SourceError>;
