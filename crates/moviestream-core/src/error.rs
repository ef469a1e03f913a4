use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Uniform JSON error body returned by every MovieStream endpoint.
///
/// ```json
/// { "kind": "MOVIE_NOT_FOUND", "error": "movie not found" }
/// ```
///
/// `details` is only present for validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub kind: &'a str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<'a> ErrorEnvelope<'a> {
    pub fn new(kind: &'a str, error: impl Into<String>) -> Self {
        Self {
            kind,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Render with the given status.
    ///
    /// Only 5xx are logged here. tower-http TraceLayer already records
    /// method/uri/status for all requests; 4xx are expected client errors.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        if status.is_server_error() {
            tracing::error!(kind = self.kind, status = status.as_u16(), "{}", self.error);
        }
        (status, axum::Json(self)).into_response()
    }
}
