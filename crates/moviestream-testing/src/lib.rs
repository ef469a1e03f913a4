//! Test utilities for MovieStream services.
//!
//! Import from `dev-dependencies` only, never from production code.

pub mod auth;
