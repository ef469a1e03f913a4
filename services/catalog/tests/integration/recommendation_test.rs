use serde_json::json;

use moviestream_catalog::error::CatalogServiceError;
use moviestream_catalog::usecase::recommendation::GetRecommendedMoviesUseCase;

use crate::helpers::{MockMovieRepo, MockUserRepo, capture_logs, test_movie, test_user};

fn catalog() -> MockMovieRepo {
    MockMovieRepo::new(vec![
        test_movie("tt1", &["Drama"], 4),
        test_movie("tt2", &["Comedy"], 1),
        test_movie("tt3", &["Horror"], 1),
        test_movie("tt4", &["Drama", "Crime"], 2),
        test_movie("tt5", &["Comedy", "Drama"], 3),
        test_movie("tt6", &["Fantasy"], 5),
        test_movie("tt7", &["Drama"], 2),
    ])
}

fn ids(movies: &[moviestream_catalog::domain::types::Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.imdb_id.as_str()).collect()
}

#[tokio::test]
async fn should_recommend_preferred_genres_by_rank() {
    let user = test_user(
        "u-1",
        "USER",
        json!([
            { "genre_id": 2, "genre_name": "Drama" },
            { "genre_id": 1, "genre_name": "Comedy" }
        ]),
    );
    let usecase = GetRecommendedMoviesUseCase {
        users: MockUserRepo::new(vec![user]),
        movies: catalog(),
        limit: 5,
    };

    let movies = usecase.execute("u-1").await.unwrap();
    assert_eq!(ids(&movies), vec!["tt2", "tt4", "tt7", "tt5", "tt1"]);
}

#[tokio::test]
async fn should_respect_limit() {
    let user = test_user("u-1", "USER", json!([{ "genre_id": 2, "genre_name": "Drama" }]));
    let usecase = GetRecommendedMoviesUseCase {
        users: MockUserRepo::new(vec![user]),
        movies: catalog(),
        limit: 2,
    };

    let movies = usecase.execute("u-1").await.unwrap();
    assert_eq!(ids(&movies), vec!["tt4", "tt7"]);
    assert_eq!(*usecase.movies.genre_query_limits.lock().unwrap(), vec![2]);
}

#[tokio::test]
async fn should_return_empty_for_unknown_user() {
    let usecase = GetRecommendedMoviesUseCase {
        users: MockUserRepo::empty(),
        movies: catalog(),
        limit: 5,
    };
    assert!(usecase.execute("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn should_return_empty_without_favourite_genres() {
    let user = test_user("u-1", "USER", json!([]));
    let usecase = GetRecommendedMoviesUseCase {
        users: MockUserRepo::new(vec![user]),
        movies: catalog(),
        limit: 5,
    };
    assert!(usecase.execute("u-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn should_fail_on_malformed_favourite_genres() {
    let user = test_user("u-1", "USER", json!({ "genre_name": "Drama" }));
    let usecase = GetRecommendedMoviesUseCase {
        users: MockUserRepo::new(vec![user]),
        movies: catalog(),
        limit: 5,
    };
    let (logs, _guard) = capture_logs();
    let result = usecase.execute("u-1").await;
    assert!(
        matches!(result, Err(CatalogServiceError::DataShape(_))),
        "expected DataShape, got {result:?}"
    );
    let logged = logs.contents();
    assert!(logged.contains("unreadable favourite genres"), "{logged}");
    assert!(logged.contains("u-1"), "{logged}");
}

#[tokio::test]
async fn should_ignore_genres_nobody_has() {
    let user = test_user("u-1", "USER", json!([{ "genre_id": 9, "genre_name": "Western" }]));
    let usecase = GetRecommendedMoviesUseCase {
        users: MockUserRepo::new(vec![user]),
        movies: catalog(),
        limit: 5,
    };
    assert!(usecase.execute("u-1").await.unwrap().is_empty());
}
