use axum::{Json, extract::State};

use moviestream_auth_types::context::AuthContext;

use crate::error::CatalogServiceError;
use crate::handlers::movie::{MovieResponse, movie_list};
use crate::state::AppState;
use crate::usecase::recommendation::GetRecommendedMoviesUseCase;

// ── GET /recommendedmovies ───────────────────────────────────────────────────

pub async fn get_recommended_movies(
    auth: AuthContext,
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>, CatalogServiceError> {
    let user_id = auth.user_id.ok_or(CatalogServiceError::MissingUserId)?;

    let usecase = GetRecommendedMoviesUseCase {
        users: state.user_repo(),
        movies: state.movie_repo(),
        limit: state.recommended_movie_limit,
    };
    Ok(movie_list(usecase.execute(&user_id).await?))
}
