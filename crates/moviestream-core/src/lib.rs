//! Cross-cutting plumbing shared by MovieStream services: the JSON error
//! envelope, storage deadlines, environment parsing, tracing and health.

pub mod config;
pub mod deadline;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
