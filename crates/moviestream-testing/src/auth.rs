//! Mock auth helpers for integration tests.
//!
//! `MockAuth` mints real signed tokens so requests travel through the same
//! `AuthContext` extractor as production traffic.

use http::HeaderValue;
use moviestream_auth_types::cookie::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use moviestream_auth_types::token::{REFRESH_TOKEN_EXP, issue_token};
use moviestream_domain::user::UserRole;

/// Secret shared between test app state and minted tokens.
pub const TEST_JWT_SECRET: &str = "moviestream-test-secret";

/// Identity to mint tokens for. Empty strings produce tokens without that claim.
#[derive(Debug, Clone)]
pub struct MockAuth {
    pub user_id: String,
    pub role: String,
}

impl MockAuth {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    pub fn user(user_id: impl Into<String>) -> Self {
        Self::new(user_id, UserRole::User.as_str())
    }

    pub fn admin(user_id: impl Into<String>) -> Self {
        Self::new(user_id, UserRole::Admin.as_str())
    }

    /// Signed access token valid for one hour.
    pub fn access_token(&self) -> String {
        issue_token(&self.user_id, &self.role, 3600, TEST_JWT_SECRET)
            .expect("sign test access token")
            .0
    }

    pub fn refresh_token(&self) -> String {
        issue_token(&self.user_id, &self.role, REFRESH_TOKEN_EXP, TEST_JWT_SECRET)
            .expect("sign test refresh token")
            .0
    }

    /// `Authorization: Bearer <token>` value.
    pub fn bearer(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("Bearer {}", self.access_token()))
            .expect("bearer header value")
    }

    /// `Cookie` header carrying both access and refresh tokens.
    pub fn cookie_header(&self) -> HeaderValue {
        HeaderValue::from_str(&format!(
            "{ACCESS_TOKEN_COOKIE}={}; {REFRESH_TOKEN_COOKIE}={}",
            self.access_token(),
            self.refresh_token()
        ))
        .expect("cookie header value")
    }
}
