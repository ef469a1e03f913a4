use anyhow::Context as _;
use chrono::Utc;
use uuid::Uuid;

use moviestream_auth_types::context::JwtSecret;
use moviestream_auth_types::token::issue_token_pair;
use moviestream_domain::user::UserRole;

use crate::domain::password::{hash_password, verify_password};
use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::CatalogServiceError;

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ── Register ─────────────────────────────────────────────────────────────────

/// Create a USER-role profile from a registration form.
///
/// Self-registration never grants ADMIN.
pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUseCase<U> {
    pub async fn execute(&self, form: NewUser) -> Result<User, CatalogServiceError> {
        let form = NewUser {
            email: normalize_email(&form.email),
            first_name: form.first_name.trim().to_owned(),
            last_name: form.last_name.trim().to_owned(),
            ..form
        };
        form.validate().map_err(CatalogServiceError::ValidationFailed)?;

        let password = form.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("join password hasher")?
            .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;

        let now = Utc::now();
        let user = User {
            user_id: Uuid::now_v7().to_string(),
            email: form.email,
            first_name: form.first_name,
            last_name: form.last_name,
            role: UserRole::User.as_str().to_owned(),
            favourite_genres: serde_json::to_value(&form.favourite_genres)
                .context("encode favourite genres")?,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        tracing::info!(user_id = %user.user_id, "user registered");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

/// Check email and password, then issue a token pair.
///
/// Unknown email and wrong password fail the same way.
pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: JwtSecret,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(
        &self,
        email: &str,
        password: String,
    ) -> Result<LoginOutput, CatalogServiceError> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            tracing::debug!("login for unknown email");
            return Err(CatalogServiceError::InvalidCredentials);
        };

        let stored_hash = user.password_hash.clone();
        let matches =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .context("join password verifier")?;
        if !matches {
            tracing::debug!(user_id = %user.user_id, "login with wrong password");
            return Err(CatalogServiceError::InvalidCredentials);
        }

        let pair = issue_token_pair(&user.user_id, &user.role, self.jwt_secret.as_str())
            .context("sign token pair")?;
        tracing::info!(user_id = %user.user_id, "user logged in");

        Ok(LoginOutput {
            user,
            access_token: pair.access_token,
            access_token_exp: pair.access_token_exp,
            refresh_token: pair.refresh_token,
        })
    }
}
