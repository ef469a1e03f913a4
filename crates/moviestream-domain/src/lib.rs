//! Domain types shared across MovieStream crates.
//!
//! Pure types with no framework dependencies: user roles, sentiment labels
//! and ranking reference entries.

pub mod ranking;
pub mod user;
