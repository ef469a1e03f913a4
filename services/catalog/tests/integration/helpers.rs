use std::sync::{Arc, Mutex};

use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, RuntimeErr};
use serde_json::Value;
use uuid::Uuid;

use moviestream_catalog::config::CatalogConfig;
use moviestream_catalog::domain::repository::{MovieRepository, RankingRepository, UserRepository};
use moviestream_catalog::domain::types::{Genre, Movie, NewMovie, User};
use moviestream_catalog::error::CatalogServiceError;
use moviestream_catalog::state::AppState;
use moviestream_domain::ranking::{NOT_RANKED, Ranking};
use moviestream_testing::auth::TEST_JWT_SECRET;

// ── MockMovieRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockMovieRepo {
    pub movies: Arc<Mutex<Vec<Movie>>>,
    /// `limit` of every `list_by_genres` call, in order.
    pub genre_query_limits: Arc<Mutex<Vec<usize>>>,
}

impl MockMovieRepo {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(Mutex::new(movies)),
            ..Self::default()
        }
    }

    /// Shared handle to the stored movies for post-execution inspection.
    pub fn movies_handle(&self) -> Arc<Mutex<Vec<Movie>>> {
        Arc::clone(&self.movies)
    }
}

impl MovieRepository for MockMovieRepo {
    async fn list(&self) -> Result<Vec<Movie>, CatalogServiceError> {
        Ok(self.movies.lock().unwrap().clone())
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, CatalogServiceError> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.imdb_id == imdb_id)
            .cloned())
    }

    async fn create(&self, movie: &NewMovie) -> Result<Uuid, CatalogServiceError> {
        let mut movies = self.movies.lock().unwrap();
        if movies.iter().any(|m| m.imdb_id == movie.imdb_id) {
            return Err(CatalogServiceError::MovieAlreadyExists);
        }
        let id = Uuid::now_v7();
        movies.push(Movie {
            id,
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            youtube_id: movie.youtube_id.clone(),
            genre: movie.genre.clone(),
            admin_review: movie.admin_review.clone(),
            ranking: movie.ranking.clone(),
        });
        Ok(id)
    }

    async fn update_review(
        &self,
        imdb_id: &str,
        admin_review: &str,
        ranking: &Ranking,
    ) -> Result<u64, CatalogServiceError> {
        let mut matched = 0;
        for movie in self
            .movies
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|m| m.imdb_id == imdb_id)
        {
            movie.admin_review = admin_review.to_owned();
            movie.ranking = ranking.clone();
            matched += 1;
        }
        Ok(matched)
    }

    async fn list_by_genres(
        &self,
        genre_names: &[String],
        limit: usize,
    ) -> Result<Vec<Movie>, CatalogServiceError> {
        self.genre_query_limits.lock().unwrap().push(limit);
        let mut found: Vec<Movie> = self
            .movies
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.genre.iter().any(|g| genre_names.contains(&g.genre_name)))
            .cloned()
            .collect();
        found.sort_by_key(|m| m.ranking.ranking_value);
        found.truncate(limit);
        Ok(found)
    }
}

// ── MockRankingRepo ──────────────────────────────────────────────────────────

pub struct MockRankingRepo {
    pub rankings: Vec<Ranking>,
}

impl MockRankingRepo {
    pub fn seeded() -> Self {
        Self {
            rankings: seeded_rankings(),
        }
    }
}

impl RankingRepository for MockRankingRepo {
    async fn list(&self) -> Result<Vec<Ranking>, CatalogServiceError> {
        Ok(self.rankings.clone())
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, CatalogServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), CatalogServiceError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(CatalogServiceError::EmailAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn favourite_genres(&self, user_id: &str) -> Result<Option<Value>, CatalogServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.favourite_genres.clone()))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn ranking(name: &str, value: i32) -> Ranking {
    Ranking {
        ranking_name: name.into(),
        ranking_value: value,
    }
}

pub fn seeded_rankings() -> Vec<Ranking> {
    vec![
        ranking("Excellent", 1),
        ranking("Good", 2),
        ranking("Okay", 3),
        ranking("Bad", 4),
        ranking("Terrible", 5),
        ranking(NOT_RANKED, 999),
    ]
}

pub fn genre(genre_id: i32, genre_name: &str) -> Genre {
    Genre {
        genre_id,
        genre_name: genre_name.into(),
    }
}

pub fn test_movie(imdb_id: &str, genres: &[&str], ranking_value: i32) -> Movie {
    Movie {
        id: Uuid::now_v7(),
        imdb_id: imdb_id.into(),
        title: format!("Movie {imdb_id}"),
        poster_path: format!("https://posters.example/{imdb_id}.jpg"),
        youtube_id: format!("yt-{imdb_id}"),
        genre: genres
            .iter()
            .enumerate()
            .map(|(i, name)| genre(i as i32 + 1, name))
            .collect(),
        admin_review: String::new(),
        ranking: ranking(NOT_RANKED, ranking_value),
    }
}

pub fn new_movie(imdb_id: &str) -> NewMovie {
    NewMovie {
        imdb_id: imdb_id.into(),
        title: "The Grand Budapest Hotel".into(),
        poster_path: "https://posters.example/gbh.jpg".into(),
        youtube_id: "1Fg5iWmQjwk".into(),
        genre: vec![genre(1, "Comedy"), genre(2, "Drama")],
        admin_review: String::new(),
        ranking: ranking(NOT_RANKED, 999),
    }
}

pub fn test_user(user_id: &str, role: &str, favourite_genres: Value) -> User {
    User {
        user_id: user_id.into(),
        email: format!("{user_id}@example.com"),
        first_name: "Test".into(),
        last_name: "User".into(),
        role: role.into(),
        favourite_genres,
        password_hash: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_config() -> CatalogConfig {
    CatalogConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused".into()),
        "JWT_SECRET" => Some(TEST_JWT_SECRET.into()),
        _ => None,
    })
    .unwrap()
}

/// App state over a disconnected database. Only for paths that stop before
/// any query: sea-orm panics when a disconnected handle is queried. The
/// readiness ping is the exception and reports an error.
pub fn disconnected_state() -> AppState {
    AppState::new(DatabaseConnection::Disconnected, &test_config())
}

/// App state over a scripted sea-orm mock database.
pub fn mock_db_state(db: MockDatabase) -> AppState {
    AppState::new(db.into_connection(), &test_config())
}

/// App state whose first storage query fails with a driver error.
pub fn failing_storage_state() -> AppState {
    mock_db_state(
        MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Conn(
            RuntimeErr::Internal("connection reset by peer".into()),
        )]),
    )
}

// ── Log capture ──────────────────────────────────────────────────────────────

/// Formatted log output collected from the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Send this thread's events to a buffer until the guard drops. Works with
/// the default current-thread `#[tokio::test]` runtime.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
