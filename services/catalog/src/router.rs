use axum::{
    Router,
    routing::{get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use moviestream_core::health::healthz;
use moviestream_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    account::{login, register},
    genre::{get_genres, get_rankings},
    health::readyz,
    movie::{add_movie, get_movie, get_movies, update_admin_review},
    recommendation::get_recommended_movies,
    token::{logout, refresh_token},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Public catalog
        .route("/movies", get(get_movies))
        .route("/genres", get(get_genres))
        .route("/rankings", get(get_rankings))
        // Session
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/logout", post(logout))
        // Authenticated
        .route("/movie/{imdb_id}", get(get_movie))
        .route("/addmovie", post(add_movie))
        .route("/updatereview/{imdb_id}", patch(update_admin_review))
        .route("/recommendedmovies", get(get_recommended_movies))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
}
