pub mod password;
pub mod preference;
pub mod ranking;
pub mod recommendation;
pub mod repository;
pub mod sentiment;
pub mod types;
