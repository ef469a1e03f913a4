use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use moviestream_auth_types::cookie::{
    REFRESH_TOKEN_COOKIE, clear_cookies, set_access_token_cookie, set_refresh_token_cookie,
};

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::token::RefreshTokenUseCase;

// ── POST /refresh ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub user_id: String,
    pub role: String,
    pub access_token_exp: u64,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, CatalogServiceError> {
    let refresh_value = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(CatalogServiceError::InvalidRefreshToken)?;

    let usecase = RefreshTokenUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&refresh_value).await?;

    let domain = state.cookie_domain.as_deref();
    let jar = set_access_token_cookie(jar, out.access_token, domain);
    let jar = set_refresh_token_cookie(jar, out.refresh_token, domain);

    let body = RefreshTokenResponse {
        user_id: out.user_id,
        role: out.role,
        access_token_exp: out.access_token_exp,
    };
    Ok((StatusCode::OK, jar, Json(body)))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_cookies(jar, state.cookie_domain.as_deref());
    (StatusCode::NO_CONTENT, jar)
}
