use anyhow::Context as _;

use moviestream_auth_types::context::JwtSecret;
use moviestream_auth_types::token::{issue_token_pair, validate_token};

use crate::domain::repository::UserRepository;
use crate::error::CatalogServiceError;

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub user_id: String,
    pub role: String,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

/// Trade a refresh token for a new token pair.
///
/// The user is reloaded so the new tokens carry the current role.
pub struct RefreshTokenUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: JwtSecret,
}

impl<U: UserRepository> RefreshTokenUseCase<U> {
    pub async fn execute(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshTokenOutput, CatalogServiceError> {
        let claims = validate_token(refresh_token, self.jwt_secret.as_str()).map_err(|e| {
            tracing::debug!(error = %e, "rejecting refresh token");
            CatalogServiceError::InvalidRefreshToken
        })?;
        if claims.sub.is_empty() {
            return Err(CatalogServiceError::InvalidRefreshToken);
        }

        let user = self
            .users
            .find_by_id(&claims.sub)
            .await?
            .ok_or(CatalogServiceError::InvalidRefreshToken)?;

        let pair = issue_token_pair(&user.user_id, &user.role, self.jwt_secret.as_str())
            .context("sign token pair")?;

        Ok(RefreshTokenOutput {
            user_id: user.user_id,
            role: user.role,
            access_token: pair.access_token,
            access_token_exp: pair.access_token_exp,
            refresh_token: pair.refresh_token,
        })
    }
}
