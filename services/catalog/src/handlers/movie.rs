use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use moviestream_auth_types::context::AuthContext;
use moviestream_domain::ranking::Ranking;

use crate::domain::types::{Genre, Movie, NewMovie};
use crate::error::{CatalogServiceError, JsonBody};
use crate::handlers::require_admin;
use crate::state::AppState;
use crate::usecase::movie::{
    AddMovieUseCase, GetMovieUseCase, GetMoviesUseCase, UpdateAdminReviewUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: Uuid,
    pub imdb_id: String,
    pub title: String,
    pub poster_path: String,
    pub youtube_id: String,
    pub genre: Vec<Genre>,
    pub admin_review: String,
    pub ranking: Ranking,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            imdb_id: m.imdb_id,
            title: m.title,
            poster_path: m.poster_path,
            youtube_id: m.youtube_id,
            genre: m.genre,
            admin_review: m.admin_review,
            ranking: m.ranking,
        }
    }
}

pub(crate) fn movie_list(movies: Vec<Movie>) -> Json<Vec<MovieResponse>> {
    Json(movies.into_iter().map(MovieResponse::from).collect())
}

// ── GET /movies ──────────────────────────────────────────────────────────────

pub async fn get_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>, CatalogServiceError> {
    let usecase = GetMoviesUseCase {
        repo: state.movie_repo(),
    };
    Ok(movie_list(usecase.execute().await?))
}

// ── GET /movie/{imdb_id} ─────────────────────────────────────────────────────

pub async fn get_movie(
    _auth: AuthContext,
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> Result<Json<MovieResponse>, CatalogServiceError> {
    let usecase = GetMovieUseCase {
        repo: state.movie_repo(),
    };
    let movie = usecase.execute(&imdb_id).await?;
    Ok(Json(movie.into()))
}

// ── POST /addmovie ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddMovieRequest {
    pub imdb_id: String,
    pub title: String,
    pub poster_path: String,
    pub youtube_id: String,
    pub genre: Vec<Genre>,
    #[serde(default)]
    pub admin_review: String,
    pub ranking: Ranking,
}

impl From<AddMovieRequest> for NewMovie {
    fn from(req: AddMovieRequest) -> Self {
        Self {
            imdb_id: req.imdb_id,
            title: req.title,
            poster_path: req.poster_path,
            youtube_id: req.youtube_id,
            genre: req.genre,
            admin_review: req.admin_review,
            ranking: req.ranking,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddMovieResponse {
    pub inserted_id: Uuid,
}

pub async fn add_movie(
    _auth: AuthContext,
    State(state): State<AppState>,
    WithRejection(Json(body), _): JsonBody<AddMovieRequest>,
) -> Result<impl IntoResponse, CatalogServiceError> {
    let usecase = AddMovieUseCase {
        repo: state.movie_repo(),
    };
    let inserted_id = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(AddMovieResponse { inserted_id })))
}

// ── PATCH /updatereview/{imdb_id} ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub admin_review: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateReviewResponse {
    pub ranking_name: String,
    pub admin_review: String,
}

pub async fn update_admin_review(
    auth: AuthContext,
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
    WithRejection(Json(body), _): JsonBody<UpdateReviewRequest>,
) -> Result<Json<UpdateReviewResponse>, CatalogServiceError> {
    require_admin(&auth)?;

    let usecase = UpdateAdminReviewUseCase {
        movies: state.movie_repo(),
        rankings: state.ranking_repo(),
    };
    let out = usecase.execute(&imdb_id, body.admin_review).await?;
    tracing::info!(%imdb_id, ranking = %out.ranking_name, "admin review updated");

    Ok(Json(UpdateReviewResponse {
        ranking_name: out.ranking_name,
        admin_review: out.admin_review,
    }))
}
