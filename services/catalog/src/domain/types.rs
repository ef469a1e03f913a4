use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use moviestream_domain::ranking::Ranking;

/// Genre reference entry, also embedded in movies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub genre_id: i32,
    pub genre_name: String,
}

/// A catalog movie with its genres and current ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: Uuid,
    pub imdb_id: String,
    pub title: String,
    pub poster_path: String,
    pub youtube_id: String,
    pub genre: Vec<Genre>,
    pub admin_review: String,
    pub ranking: Ranking,
}

/// Movie as submitted for insertion, before it has a storage id.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub imdb_id: String,
    pub title: String,
    pub poster_path: String,
    pub youtube_id: String,
    pub genre: Vec<Genre>,
    pub admin_review: String,
    pub ranking: Ranking,
}

const TITLE_CHARS: std::ops::RangeInclusive<usize> = 2..=500;
const GENRE_NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=100;

fn is_http_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}

impl NewMovie {
    /// Check field constraints. On failure returns every violated rule,
    /// joined into one `field: reason` list.
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();

        if self.imdb_id.trim().is_empty() {
            problems.push("imdb_id: required".to_owned());
        }
        if !TITLE_CHARS.contains(&self.title.chars().count()) {
            problems.push("title: must be 2..=500 characters".to_owned());
        }
        if self.poster_path.trim().is_empty() {
            problems.push("poster_path: required".to_owned());
        } else if !is_http_url(&self.poster_path) {
            problems.push("poster_path: must be an http(s) URL".to_owned());
        }
        if self.youtube_id.trim().is_empty() {
            problems.push("youtube_id: required".to_owned());
        }
        if self.genre.is_empty() {
            problems.push("genre: at least one genre is required".to_owned());
        }
        for (i, genre) in self.genre.iter().enumerate() {
            if !GENRE_NAME_CHARS.contains(&genre.genre_name.chars().count()) {
                problems.push(format!("genre[{i}].genre_name: must be 2..=100 characters"));
            }
        }
        if self.ranking.ranking_name.trim().is_empty() {
            problems.push("ranking.ranking_name: required".to_owned());
        }
        if self.ranking.ranking_value == 0 {
            problems.push("ranking.ranking_value: required".to_owned());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

/// User profile as seen by the catalog.
///
/// `favourite_genres` is the raw stored document; read it through
/// [`crate::domain::preference::favourite_genre_names`].
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub favourite_genres: serde_json::Value,
    /// Argon2 PHC string; empty for profiles that cannot log in.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration form. `password` is plaintext until the use case hashes it.
#[derive(Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub favourite_genres: Vec<Genre>,
}

const NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=100;
const PASSWORD_CHARS: std::ops::RangeInclusive<usize> = 6..=128;

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && domain.contains('.')
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl NewUser {
    /// Same contract as [`NewMovie::validate`].
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();

        if !NAME_CHARS.contains(&self.first_name.trim().chars().count()) {
            problems.push("first_name: must be 2..=100 characters".to_owned());
        }
        if !NAME_CHARS.contains(&self.last_name.trim().chars().count()) {
            problems.push("last_name: must be 2..=100 characters".to_owned());
        }
        if !is_email(&self.email) {
            problems.push("email: must be an email address".to_owned());
        }
        if !PASSWORD_CHARS.contains(&self.password.chars().count()) {
            problems.push("password: must be 6..=128 characters".to_owned());
        }
        for (i, genre) in self.favourite_genres.iter().enumerate() {
            if !GENRE_NAME_CHARS.contains(&genre.genre_name.chars().count()) {
                problems.push(format!(
                    "favourite_genres[{i}].genre_name: must be 2..=100 characters"
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("favourite_genres", &self.favourite_genres)
            .finish_non_exhaustive()
    }
}
