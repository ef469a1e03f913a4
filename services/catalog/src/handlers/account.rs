use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{CookieJar, WithRejection};
use serde::{Deserialize, Serialize};

use moviestream_auth_types::cookie::{set_access_token_cookie, set_refresh_token_cookie};

use crate::domain::types::{Genre, NewUser, User};
use crate::error::{CatalogServiceError, JsonBody};
use crate::state::AppState;
use crate::usecase::account::{LoginUseCase, RegisterUseCase};

// ── POST /register ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub favourite_genres: Vec<Genre>,
}

impl From<RegisterRequest> for NewUser {
    fn from(r: RegisterRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            password: r.password,
            favourite_genres: r.favourite_genres,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: String,
}

pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, CatalogServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user.user_id,
        }),
    ))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub favourite_genres: serde_json::Value,
    pub access_token_exp: u64,
}

impl LoginResponse {
    fn new(user: User, access_token_exp: u64) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            favourite_genres: user.favourite_genres,
            access_token_exp,
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(body), _): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, CatalogServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&body.email, body.password).await?;

    let domain = state.cookie_domain.as_deref();
    let jar = set_access_token_cookie(jar, out.access_token, domain);
    let jar = set_refresh_token_cookie(jar, out.refresh_token, domain);

    Ok((
        StatusCode::OK,
        jar,
        Json(LoginResponse::new(out.user, out.access_token_exp)),
    ))
}
