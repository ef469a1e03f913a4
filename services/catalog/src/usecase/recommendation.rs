use crate::domain::preference::favourite_genre_names;
use crate::domain::recommendation::recommend;
use crate::domain::repository::{MovieRepository, UserRepository};
use crate::domain::types::Movie;
use crate::error::CatalogServiceError;

/// Movies for the caller, picked by their favourite genres.
pub struct GetRecommendedMoviesUseCase<U: UserRepository, M: MovieRepository> {
    pub users: U,
    pub movies: M,
    pub limit: usize,
}

impl<U: UserRepository, M: MovieRepository> GetRecommendedMoviesUseCase<U, M> {
    pub async fn execute(&self, user_id: &str) -> Result<Vec<Movie>, CatalogServiceError> {
        let doc = self.users.favourite_genres(user_id).await?;
        let preferred = favourite_genre_names(doc.as_ref()).inspect_err(|e| {
            tracing::error!(user_id, error = %e, "unreadable favourite genres");
        })?;
        if preferred.is_empty() {
            tracing::debug!(user_id, "no favourite genres");
            return Ok(Vec::new());
        }
        // Candidates arrive sorted and bounded; `recommend` still enforces both.
        let candidates = self.movies.list_by_genres(&preferred, self.limit).await?;
        Ok(recommend(candidates, &preferred, self.limit))
    }
}
