//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::{
    ApiTokenMetadata, AuthServiceError, IssuedApiToken, generate_api_token, hash_api_token,
    repository::PgAuthRepository,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token. Pass `None` to generate the raw token.
    ///
    /// # Errors
    ///
    /// Returns an error if the supplied token is blank or the insert fails.
    pub async fn issue_api_token(
        &self,
        raw_token: Option<String>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token = raw_token.unwrap_or_else(generate_api_token);

        if token.trim().is_empty() {
            return Err(AuthServiceError::EmptyToken);
        }

        let metadata = self
            .repository
            .create_api_token(Uuid::now_v7(), &hash_api_token(&token))
            .await?;

        info!(token_uuid = %metadata.uuid, "issued api token");

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(&self) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        self.repository
            .list_api_tokens()
            .await
            .map_err(AuthServiceError::from)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        self.repository
            .revoke_api_token(token_uuid)
            .await
            .map(|record| record.is_some())
            .map_err(AuthServiceError::from)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Uuid, AuthServiceError> {
        if bearer_token.is_empty() {
            return Err(AuthServiceError::NotFound);
        }

        let token = self
            .repository
            .find_active_api_token_by_hash(&hash_api_token(bearer_token))
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        // Best-effort metadata update; auth success should not depend on this write.
        let _touch_result = self.repository.touch_api_token_last_used(token.uuid).await;

        Ok(token.uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the UUID of the active token it matches.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Uuid, AuthServiceError>;
}
