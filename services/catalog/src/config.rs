use moviestream_core::config::{MissingVar, parse_or_default, positive_or_default, required};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RECOMMENDED_MOVIE_LIMIT: u64 = 5;
pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 100;

/// Catalog service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for access/refresh tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 8080). Env var: `CATALOG_PORT`.
    pub port: u16,
    /// Domain attribute for token cookies. Env var: `COOKIE_DOMAIN`.
    pub cookie_domain: Option<String>,
    /// Max movies returned by `/recommendedmovies`. Env var: `RECOMMENDED_MOVIE_LIMIT`.
    pub recommended_movie_limit: u64,
    /// Per-operation storage deadline. Env var: `STORAGE_TIMEOUT_SECS`.
    pub storage_timeout_secs: u64,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, MissingVar> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MissingVar> {
        Ok(Self {
            database_url: required("DATABASE_URL", lookup("DATABASE_URL"))?,
            jwt_secret: required("JWT_SECRET", lookup("JWT_SECRET"))?,
            port: parse_or_default("CATALOG_PORT", lookup("CATALOG_PORT"), DEFAULT_PORT),
            cookie_domain: lookup("COOKIE_DOMAIN").filter(|v| !v.trim().is_empty()),
            recommended_movie_limit: positive_or_default(
                "RECOMMENDED_MOVIE_LIMIT",
                lookup("RECOMMENDED_MOVIE_LIMIT"),
                DEFAULT_RECOMMENDED_MOVIE_LIMIT,
            ),
            storage_timeout_secs: positive_or_default(
                "STORAGE_TIMEOUT_SECS",
                lookup("STORAGE_TIMEOUT_SECS"),
                DEFAULT_STORAGE_TIMEOUT_SECS,
            ),
        })
    }
}
