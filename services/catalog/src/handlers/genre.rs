use axum::{Json, extract::State};

use moviestream_domain::ranking::Ranking;

use crate::domain::types::Genre;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::genre::{GetGenresUseCase, GetRankingsUseCase};

// ── GET /genres ──────────────────────────────────────────────────────────────

pub async fn get_genres(
    State(state): State<AppState>,
) -> Result<Json<Vec<Genre>>, CatalogServiceError> {
    let usecase = GetGenresUseCase {
        repo: state.genre_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /rankings ────────────────────────────────────────────────────────────

pub async fn get_rankings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ranking>>, CatalogServiceError> {
    let usecase = GetRankingsUseCase {
        repo: state.ranking_repo(),
    };
    Ok(Json(usecase.execute().await?))
}
