//! Auth service errors.

use thiserror::Error;

/// Why a token could not be issued, revoked or authenticated.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// No active token matches; unknown and revoked tokens look the same.
    #[error("unknown or revoked api token")]
    NotFound,

    /// Blank tokens are never issued nor looked up.
    #[error("api token cannot be blank")]
    EmptyToken,

    /// Storage failure.
    #[error("token storage error")]
    Sql(#[from] sqlx::Error),
}
