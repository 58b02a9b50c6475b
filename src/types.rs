//! Error types for Vitrine
//!
//! Every failure surfaced to the HTTP boundary carries a stable kind
//! (machine-readable code + status) and a human message.

use hyper::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, VitrineError>;

/// Error taxonomy for content operations
#[derive(Error, Debug)]
pub enum VitrineError {
    /// An entity or sub-entity id has no match
    #[error("{0}")]
    NotFound(String),

    /// Bad input detected before any mutation or I/O
    #[error("{0}")]
    Validation(String),

    /// Media store upload/delete failure
    #[error("Asset operation failed: {0}")]
    Asset(String),

    /// Optimistic version check failed on save
    #[error("{0}")]
    Conflict(String),

    /// Document store failure
    #[error("Database error: {0}")]
    Database(String),

    /// Authentication/authorization failure
    #[error("{0}")]
    Auth(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VitrineError {
    /// HTTP status for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            VitrineError::NotFound(_) => StatusCode::NOT_FOUND,
            VitrineError::Validation(_) => StatusCode::BAD_REQUEST,
            VitrineError::Asset(_) => StatusCode::BAD_GATEWAY,
            VitrineError::Conflict(_) => StatusCode::CONFLICT,
            VitrineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            VitrineError::Auth(_) => StatusCode::UNAUTHORIZED,
            VitrineError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Stable machine-readable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            VitrineError::NotFound(_) => "NOT_FOUND",
            VitrineError::Validation(_) => "VALIDATION",
            VitrineError::Asset(_) => "ASSET_OPERATION_FAILED",
            VitrineError::Conflict(_) => "CONCURRENCY_CONFLICT",
            VitrineError::Database(_) => "DB_ERROR",
            VitrineError::Auth(_) => "UNAUTHORIZED",
            VitrineError::Config(_) => "NOT_CONFIGURED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            VitrineError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            VitrineError::Conflict("stale".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            VitrineError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(VitrineError::Asset("x".into()).code(), "ASSET_OPERATION_FAILED");
        assert_eq!(VitrineError::Conflict("x".into()).code(), "CONCURRENCY_CONFLICT");
    }
}
