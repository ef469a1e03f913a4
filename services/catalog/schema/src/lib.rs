//! sea-orm entities for the catalog service.

pub mod genres;
pub mod movie_genres;
pub mod movies;
pub mod rankings;
pub mod users;
