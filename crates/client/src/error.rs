//! Errors surfaced by the HTTP client collaborator.

/// Result type returned by every client call.
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client error.
///
/// Resource wrappers never translate these; callers see exactly what the
/// transport reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    /// A 2xx response body that is not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
    /// The client could not be constructed.
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_covers_401_and_403_only() {
        let status = |status| ApiError::Status {
            status,
            body: String::new(),
        };

        assert!(status(401).is_unauthorized());
        assert!(status(403).is_unauthorized());
        assert!(!status(400).is_unauthorized());
        assert!(!ApiError::Network("refused".into()).is_unauthorized());
        assert_eq!(ApiError::Decode("x".into()).status(), None);
    }
}
