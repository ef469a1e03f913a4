//! Request auth context extracted from a validated access token.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{HeaderMap, StatusCode};

use moviestream_core::error::ErrorEnvelope;

use crate::cookie::ACCESS_TOKEN_COOKIE;
use crate::token::{AuthError, validate_token};

/// HMAC secret used to validate access tokens.
///
/// Services expose it from their router state via `FromRef`.
#[derive(Clone)]
pub struct JwtSecret(Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

/// Identity of the caller for the current request.
///
/// The token itself must be present and valid, otherwise extraction fails
/// with 401. Empty `sub`/`role` claims surface as `None`; handlers decide how
/// to treat their absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Option<String>,
    pub role: Option<String>,
}

/// Extraction failure, rendered as 401 with the shared error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AuthRejection {
    #[error("no token provided")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken(#[source] AuthError),
}

impl AuthRejection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        ErrorEnvelope::new(self.kind(), self.to_string()).into_response_with(StatusCode::UNAUTHORIZED)
    }
}

/// Bearer header first, then the access-token cookie.
fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_owned());
    }
    CookieJar::from_headers(headers)
        .get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|t| !t.is_empty())
}

impl AuthContext {
    /// Validate `token` and build the context from its claims.
    pub fn from_token(token: &str, secret: &JwtSecret) -> Result<Self, AuthRejection> {
        let claims = validate_token(token, secret.as_str()).map_err(AuthRejection::InvalidToken)?;
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        Ok(Self {
            user_id: non_empty(claims.sub),
            role: non_empty(claims.role),
        })
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    JwtSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    // Extract synchronously and return a 'static future; `async fn` here
    // captures the `parts` lifetime and trips E0195 on axum-core 0.5.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let token = token_from_headers(&parts.headers);

        async move {
            let token = token.ok_or(AuthRejection::MissingToken)?;
            let ctx = Self::from_token(&token, &secret);
            if let Err(ref e) = ctx {
                tracing::debug!(error = %e, "rejecting access token");
            }
            ctx
        }
    }
}
