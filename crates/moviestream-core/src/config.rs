//! Helpers for reading service configuration from environment variables.
//!
//! Services load their config struct once at startup. Optional tunables fall
//! back to a default with a logged warning instead of aborting startup.

use std::fmt::Display;
use std::str::FromStr;

/// A required environment variable was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required environment variable {0}")]
pub struct MissingVar(pub &'static str);

/// Return the value of a required variable.
pub fn required(key: &'static str, raw: Option<String>) -> Result<String, MissingVar> {
    raw.filter(|v| !v.trim().is_empty()).ok_or(MissingVar(key))
}

/// Parse an optional variable, falling back to `default` when absent.
/// An unparsable value also falls back, with a warning.
pub fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, fallback = %default, "invalid config value");
            default
        }
    }
}

/// Like [`parse_or_default`], but zero is also rejected.
pub fn positive_or_default(key: &str, raw: Option<String>, default: u64) -> u64 {
    match parse_or_default(key, raw, default) {
        0 => {
            tracing::warn!(key, fallback = default, "config value must be positive");
            default
        }
        v => v,
    }
}
