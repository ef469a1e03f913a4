use std::collections::HashSet;

use crate::domain::types::Movie;

/// Keep movies sharing a genre with `preferred`, ordered by ascending
/// `ranking_value`, at most `limit` of them.
///
/// Genre names match exactly. The sort is stable, so equally ranked movies
/// keep their catalog order.
pub fn recommend(candidates: Vec<Movie>, preferred: &[String], limit: usize) -> Vec<Movie> {
    if preferred.is_empty() || limit == 0 {
        return Vec::new();
    }
    let preferred: HashSet<&str> = preferred.iter().map(String::as_str).collect();

    let mut movies: Vec<Movie> = candidates
        .into_iter()
        .filter(|m| {
            m.genre
                .iter()
                .any(|g| preferred.contains(g.genre_name.as_str()))
        })
        .collect();
    movies.sort_by_key(|m| m.ranking.ranking_value);
    movies.truncate(limit);
    movies
}
