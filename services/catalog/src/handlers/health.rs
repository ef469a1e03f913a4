use axum::extract::State;
use axum::http::StatusCode;

use moviestream_core::health::database_readiness;

use crate::state::AppState;

/// `GET /readyz`: 200 once the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    database_readiness(&state.db).await
}
