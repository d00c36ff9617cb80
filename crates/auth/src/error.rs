use rootmanage_client::ApiError;
use rootmanage_core::StorageError;
use thiserror::Error;

/// Session store error.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login call itself failed; carried unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend answered 2xx with a body that is not a login response.
    #[error("malformed login response: {0}")]
    MalformedResponse(String),

    /// The new session could not be written to persisted storage.
    #[error("failed to persist session: {0}")]
    Storage(#[from] StorageError),
}
