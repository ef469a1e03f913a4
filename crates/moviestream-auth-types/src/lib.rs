//! Auth types shared across MovieStream crates.
//!
//! Provides JWT issuing and validation, cookie builders, and the
//! `AuthContext` extractor.

pub mod context;
pub mod cookie;
pub mod token;
