#![allow(async_fn_in_trait)]

use moviestream_domain::ranking::Ranking;
use uuid::Uuid;

use crate::domain::types::{Genre, Movie, NewMovie, User};
use crate::error::CatalogServiceError;

/// Repository for catalog movies.
pub trait MovieRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, CatalogServiceError>;

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, CatalogServiceError>;

    /// Insert a movie with its genres. A duplicate `imdb_id` is
    /// `MovieAlreadyExists`.
    async fn create(&self, movie: &NewMovie) -> Result<Uuid, CatalogServiceError>;

    /// Set the admin review and ranking of one movie. Returns the number of
    /// matched movies; zero means no movie has that `imdb_id`.
    async fn update_review(
        &self,
        imdb_id: &str,
        admin_review: &str,
        ranking: &Ranking,
    ) -> Result<u64, CatalogServiceError>;

    /// At most `limit` movies having at least one genre named in
    /// `genre_names`, ascending by ranking value and then catalog order, each
    /// with its full genre list.
    async fn list_by_genres(
        &self,
        genre_names: &[String],
        limit: usize,
    ) -> Result<Vec<Movie>, CatalogServiceError>;
}

/// Repository for genre reference data.
pub trait GenreRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Genre>, CatalogServiceError>;
}

/// Repository for ranking reference data.
pub trait RankingRepository: Send + Sync {
    /// All entries, ascending by value.
    async fn list(&self) -> Result<Vec<Ranking>, CatalogServiceError>;
}

/// Repository for user profiles and their credentials.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, CatalogServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogServiceError>;

    /// Insert a new profile. A taken email is `EmailAlreadyExists`.
    async fn create(&self, user: &User) -> Result<(), CatalogServiceError>;

    /// Raw `favourite_genres` document, `None` when the user does not exist.
    async fn favourite_genres(
        &self,
        user_id: &str,
    ) -> Result<Option<serde_json::Value>, CatalogServiceError>;
}
