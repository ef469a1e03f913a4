use uuid::Uuid;

use moviestream_domain::ranking::Ranking;

use crate::domain::ranking::resolve_rank_value;
use crate::domain::repository::{MovieRepository, RankingRepository};
use crate::domain::sentiment::classify;
use crate::domain::types::{Movie, NewMovie};
use crate::error::CatalogServiceError;

// ── GetMovies ────────────────────────────────────────────────────────────────

pub struct GetMoviesUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> GetMoviesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Movie>, CatalogServiceError> {
        self.repo.list().await
    }
}

// ── GetMovie ─────────────────────────────────────────────────────────────────

pub struct GetMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> GetMovieUseCase<R> {
    pub async fn execute(&self, imdb_id: &str) -> Result<Movie, CatalogServiceError> {
        self.repo
            .find_by_imdb_id(imdb_id)
            .await?
            .ok_or(CatalogServiceError::MovieNotFound)
    }
}

// ── AddMovie ─────────────────────────────────────────────────────────────────

pub struct AddMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> AddMovieUseCase<R> {
    pub async fn execute(&self, movie: NewMovie) -> Result<Uuid, CatalogServiceError> {
        movie
            .validate()
            .map_err(CatalogServiceError::ValidationFailed)?;
        let id = self.repo.create(&movie).await?;
        tracing::info!(%id, imdb_id = %movie.imdb_id, "movie added");
        Ok(id)
    }
}

// ── UpdateAdminReview ────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct UpdateAdminReviewOutput {
    pub ranking_name: String,
    pub admin_review: String,
}

/// Classify the review, resolve its rank, then write both onto the movie.
///
/// Ranking resolution happens before the write, so a missing ranking entry
/// leaves the movie untouched.
pub struct UpdateAdminReviewUseCase<M: MovieRepository, R: RankingRepository> {
    pub movies: M,
    pub rankings: R,
}

impl<M: MovieRepository, R: RankingRepository> UpdateAdminReviewUseCase<M, R> {
    pub async fn execute(
        &self,
        imdb_id: &str,
        admin_review: String,
    ) -> Result<UpdateAdminReviewOutput, CatalogServiceError> {
        let label = classify(&admin_review);
        let rankings = self.rankings.list().await?;
        let ranking_value = resolve_rank_value(label, &rankings).inspect_err(|e| {
            tracing::error!(imdb_id, %label, error = %e, "cannot rank admin review");
        })?;
        let ranking = Ranking {
            ranking_name: label.as_str().to_owned(),
            ranking_value,
        };

        let matched = self
            .movies
            .update_review(imdb_id, &admin_review, &ranking)
            .await?;
        if matched == 0 {
            return Err(CatalogServiceError::MovieNotFound);
        }

        Ok(UpdateAdminReviewOutput {
            ranking_name: ranking.ranking_name,
            admin_review,
        })
    }
}
