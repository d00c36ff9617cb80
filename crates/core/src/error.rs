//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Network and storage failures have their own error types; this one covers
/// values that are rejected before anything leaves the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
