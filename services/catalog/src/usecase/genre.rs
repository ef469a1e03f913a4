use moviestream_domain::ranking::Ranking;

use crate::domain::repository::{GenreRepository, RankingRepository};
use crate::domain::types::Genre;
use crate::error::CatalogServiceError;

pub struct GetGenresUseCase<R: GenreRepository> {
    pub repo: R,
}

impl<R: GenreRepository> GetGenresUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Genre>, CatalogServiceError> {
        self.repo.list().await
    }
}

pub struct GetRankingsUseCase<R: RankingRepository> {
    pub repo: R,
}

impl<R: RankingRepository> GetRankingsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Ranking>, CatalogServiceError> {
        self.repo.list().await
    }
}
