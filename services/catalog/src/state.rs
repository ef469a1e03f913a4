use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use moviestream_auth_types::context::JwtSecret;
use moviestream_core::deadline::Deadline;

use crate::config::CatalogConfig;
use crate::infra::db::{
    DbGenreRepository, DbMovieRepository, DbRankingRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub cookie_domain: Option<String>,
    pub recommended_movie_limit: usize,
    pub deadline: Deadline,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &CatalogConfig) -> Self {
        Self {
            db,
            jwt_secret: JwtSecret::new(config.jwt_secret.as_str()),
            cookie_domain: config.cookie_domain.clone(),
            recommended_movie_limit: usize::try_from(config.recommended_movie_limit)
                .unwrap_or(usize::MAX),
            deadline: Deadline::from_secs(config.storage_timeout_secs),
        }
    }

    pub fn movie_repo(&self) -> DbMovieRepository {
        DbMovieRepository {
            db: self.db.clone(),
            deadline: self.deadline,
        }
    }

    pub fn genre_repo(&self) -> DbGenreRepository {
        DbGenreRepository {
            db: self.db.clone(),
            deadline: self.deadline,
        }
    }

    pub fn ranking_repo(&self) -> DbRankingRepository {
        DbRankingRepository {
            db: self.db.clone(),
            deadline: self.deadline,
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
            deadline: self.deadline,
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
