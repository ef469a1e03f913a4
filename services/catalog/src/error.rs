use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::WithRejection;

use moviestream_core::deadline::DeadlineExceeded;
use moviestream_core::error::ErrorEnvelope;
use moviestream_domain::ranking::SentimentLabel;

/// JSON body extractor whose rejection renders as [`CatalogServiceError::InvalidBody`].
pub type JsonBody<T> = WithRejection<axum::Json<T>, CatalogServiceError>;

/// Catalog service error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("invalid request body")]
    InvalidBody(#[from] axum::extract::rejection::JsonRejection),
    #[error("validation failed")]
    ValidationFailed(String),
    #[error("user id not found in context")]
    MissingUserId,
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("movie not found")]
    MovieNotFound,
    #[error("movie already exists")]
    MovieAlreadyExists,
    #[error("email already registered")]
    EmailAlreadyExists,
    #[error("no ranking entry for {0}")]
    RankingNotFound(SentimentLabel),
    #[error("malformed stored data: {0}")]
    DataShape(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<DeadlineExceeded> for CatalogServiceError {
    fn from(e: DeadlineExceeded) -> Self {
        Self::Internal(e.into())
    }
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::MissingUserId => "MISSING_USER_ID",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::MovieAlreadyExists => "MOVIE_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RankingNotFound(_) => "RANKING_NOT_FOUND",
            Self::DataShape(_) => "DATA_SHAPE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::ValidationFailed(_) | Self::MissingUserId => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized | Self::InvalidRefreshToken | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::MovieNotFound => StatusCode::NOT_FOUND,
            Self::MovieAlreadyExists | Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::RankingNotFound(_) | Self::DataShape(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Server-side detail goes to the log only.
        let envelope = match &self {
            Self::InvalidBody(rejection) => {
                ErrorEnvelope::new(self.kind(), self.to_string()).with_details(rejection.body_text())
            }
            Self::ValidationFailed(details) => {
                ErrorEnvelope::new(self.kind(), self.to_string()).with_details(details.clone())
            }
            Self::RankingNotFound(_) | Self::DataShape(_) => {
                tracing::error!(kind = self.kind(), detail = %self, "data integrity error");
                ErrorEnvelope::new(self.kind(), "internal server error")
            }
            Self::Internal(e) => {
                tracing::error!(kind = self.kind(), error = ?e, "internal error");
                ErrorEnvelope::new(self.kind(), "internal server error")
            }
            _ => ErrorEnvelope::new(self.kind(), self.to_string()),
        };
        envelope.into_response_with(status)
    }
}
