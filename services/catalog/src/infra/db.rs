use std::collections::{HashMap, HashSet};

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, TransactionError, TransactionTrait,
    sea_query::{Expr, Query},
};
use uuid::Uuid;

use moviestream_catalog_schema::{genres, movie_genres, movies, rankings, users};
use moviestream_core::deadline::Deadline;
use moviestream_domain::ranking::Ranking;

use crate::domain::repository::{
    GenreRepository, MovieRepository, RankingRepository, UserRepository,
};
use crate::domain::types::{Genre, Movie, NewMovie, User};
use crate::error::CatalogServiceError;

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
    pub deadline: Deadline,
}

impl DbMovieRepository {
    /// Load the genres of `models` in one query and assemble domain movies,
    /// preserving the order of `models`.
    async fn with_genres(
        &self,
        models: Vec<movies::Model>,
    ) -> Result<Vec<Movie>, CatalogServiceError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let rows = self
            .deadline
            .run(
                "load movie genres",
                movie_genres::Entity::find()
                    .filter(movie_genres::Column::MovieId.is_in(ids))
                    .order_by_asc(movie_genres::Column::GenreId)
                    .all(&self.db),
            )
            .await?
            .context("load movie genres")?;

        let mut by_movie: HashMap<Uuid, Vec<Genre>> = HashMap::new();
        for row in rows {
            by_movie.entry(row.movie_id).or_default().push(Genre {
                genre_id: row.genre_id,
                genre_name: row.genre_name,
            });
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let genre = by_movie.remove(&m.id).unwrap_or_default();
                movie_from_model(m, genre)
            })
            .collect())
    }
}

impl MovieRepository for DbMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, CatalogServiceError> {
        let models = self
            .deadline
            .run(
                "list movies",
                movies::Entity::find()
                    .order_by_asc(movies::Column::CreatedAt)
                    .order_by_asc(movies::Column::Id)
                    .all(&self.db),
            )
            .await?
            .context("list movies")?;
        self.with_genres(models).await
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, CatalogServiceError> {
        let model = self
            .deadline
            .run(
                "find movie by imdb id",
                movies::Entity::find()
                    .filter(movies::Column::ImdbId.eq(imdb_id))
                    .one(&self.db),
            )
            .await?
            .context("find movie by imdb id")?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(self.with_genres(vec![model]).await?.pop())
    }

    async fn create(&self, movie: &NewMovie) -> Result<Uuid, CatalogServiceError> {
        let id = Uuid::now_v7();
        let now = Utc::now();
        let movie_row = movies::ActiveModel {
            id: Set(id),
            imdb_id: Set(movie.imdb_id.clone()),
            title: Set(movie.title.clone()),
            poster_path: Set(movie.poster_path.clone()),
            youtube_id: Set(movie.youtube_id.clone()),
            admin_review: Set(movie.admin_review.clone()),
            ranking_name: Set(movie.ranking.ranking_name.clone()),
            ranking_value: Set(movie.ranking.ranking_value),
            created_at: Set(now),
            updated_at: Set(now),
        };
        // A genre listed twice is stored once.
        let mut seen = HashSet::new();
        let genre_rows: Vec<movie_genres::ActiveModel> = movie
            .genre
            .iter()
            .filter(|g| seen.insert(g.genre_id))
            .map(|g| movie_genres::ActiveModel {
                movie_id: Set(id),
                genre_id: Set(g.genre_id),
                genre_name: Set(g.genre_name.clone()),
            })
            .collect();

        let result = self
            .deadline
            .run(
                "create movie",
                self.db.transaction::<_, (), DbErr>(|txn| {
                    Box::pin(async move {
                        movies::Entity::insert(movie_row).exec(txn).await?;
                        if !genre_rows.is_empty() {
                            movie_genres::Entity::insert_many(genre_rows)
                                .exec(txn)
                                .await?;
                        }
                        Ok(())
                    })
                }),
            )
            .await?;

        match result {
            Ok(()) => Ok(id),
            Err(TransactionError::Transaction(e)) if is_unique_violation(&e) => {
                Err(CatalogServiceError::MovieAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create movie").into()),
        }
    }

    async fn update_review(
        &self,
        imdb_id: &str,
        admin_review: &str,
        ranking: &Ranking,
    ) -> Result<u64, CatalogServiceError> {
        let result = self
            .deadline
            .run(
                "update movie review",
                movies::Entity::update_many()
                    .col_expr(movies::Column::AdminReview, Expr::value(admin_review))
                    .col_expr(
                        movies::Column::RankingName,
                        Expr::value(ranking.ranking_name.as_str()),
                    )
                    .col_expr(
                        movies::Column::RankingValue,
                        Expr::value(ranking.ranking_value),
                    )
                    .col_expr(movies::Column::UpdatedAt, Expr::value(Utc::now()))
                    .filter(movies::Column::ImdbId.eq(imdb_id))
                    .exec(&self.db),
            )
            .await?
            .context("update movie review")?;
        Ok(result.rows_affected)
    }

    async fn list_by_genres(
        &self,
        genre_names: &[String],
        limit: usize,
    ) -> Result<Vec<Movie>, CatalogServiceError> {
        if genre_names.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        let matching_ids = Query::select()
            .column(movie_genres::Column::MovieId)
            .from(movie_genres::Entity)
            .and_where(Expr::col(movie_genres::Column::GenreName).is_in(genre_names.iter().cloned()))
            .to_owned();
        let models = self
            .deadline
            .run(
                "list movies by genre",
                movies::Entity::find()
                    .filter(movies::Column::Id.in_subquery(matching_ids))
                    .order_by_asc(movies::Column::RankingValue)
                    .order_by_asc(movies::Column::CreatedAt)
                    .order_by_asc(movies::Column::Id)
                    .limit(u64::try_from(limit).unwrap_or(u64::MAX))
                    .all(&self.db),
            )
            .await?
            .context("list movies by genre")?;
        self.with_genres(models).await
    }
}

fn movie_from_model(model: movies::Model, genre: Vec<Genre>) -> Movie {
    Movie {
        id: model.id,
        imdb_id: model.imdb_id,
        title: model.title,
        poster_path: model.poster_path,
        youtube_id: model.youtube_id,
        genre,
        admin_review: model.admin_review,
        ranking: Ranking {
            ranking_name: model.ranking_name,
            ranking_value: model.ranking_value,
        },
    }
}

// ── Genre repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGenreRepository {
    pub db: DatabaseConnection,
    pub deadline: Deadline,
}

impl GenreRepository for DbGenreRepository {
    async fn list(&self) -> Result<Vec<Genre>, CatalogServiceError> {
        let models = self
            .deadline
            .run(
                "list genres",
                genres::Entity::find()
                    .order_by_asc(genres::Column::GenreId)
                    .all(&self.db),
            )
            .await?
            .context("list genres")?;
        Ok(models
            .into_iter()
            .map(|m| Genre {
                genre_id: m.genre_id,
                genre_name: m.genre_name,
            })
            .collect())
    }
}

// ── Ranking repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRankingRepository {
    pub db: DatabaseConnection,
    pub deadline: Deadline,
}

impl RankingRepository for DbRankingRepository {
    async fn list(&self) -> Result<Vec<Ranking>, CatalogServiceError> {
        let models = self
            .deadline
            .run(
                "list rankings",
                rankings::Entity::find()
                    .order_by_asc(rankings::Column::RankingValue)
                    .all(&self.db),
            )
            .await?
            .context("list rankings")?;
        Ok(models
            .into_iter()
            .map(|m| Ranking {
                ranking_name: m.ranking_name,
                ranking_value: m.ranking_value,
            })
            .collect())
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
    pub deadline: Deadline,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, CatalogServiceError> {
        let model = self
            .deadline
            .run(
                "find user by id",
                users::Entity::find_by_id(user_id).one(&self.db),
            )
            .await?
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogServiceError> {
        let model = self
            .deadline
            .run(
                "find user by email",
                users::Entity::find()
                    .filter(users::Column::Email.eq(email))
                    .one(&self.db),
            )
            .await?
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), CatalogServiceError> {
        let row = users::ActiveModel {
            user_id: Set(user.user_id.clone()),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            role: Set(user.role.clone()),
            favourite_genres: Set(user.favourite_genres.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };
        let result = self
            .deadline
            .run("create user", users::Entity::insert(row).exec(&self.db))
            .await?;
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(CatalogServiceError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn favourite_genres(
        &self,
        user_id: &str,
    ) -> Result<Option<serde_json::Value>, CatalogServiceError> {
        let doc = self
            .deadline
            .run(
                "load favourite genres",
                users::Entity::find_by_id(user_id)
                    .select_only()
                    .column(users::Column::FavouriteGenres)
                    .into_tuple::<serde_json::Value>()
                    .one(&self.db),
            )
            .await?
            .context("load favourite genres")?;
        Ok(doc)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        user_id: model.user_id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        role: model.role,
        favourite_genres: model.favourite_genres,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
