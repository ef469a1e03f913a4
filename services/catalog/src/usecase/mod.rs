pub mod account;
pub mod genre;
pub mod movie;
pub mod recommendation;
pub mod token;
