use moviestream_domain::ranking::{Ranking, SentimentLabel};

use crate::error::CatalogServiceError;

/// Find the rank value for `label` among the ranking reference entries.
///
/// Names compare case-insensitively and the first match wins. A missing
/// entry, or one whose value is zero, is a lookup failure.
pub fn resolve_rank_value(
    label: SentimentLabel,
    rankings: &[Ranking],
) -> Result<i32, CatalogServiceError> {
    rankings
        .iter()
        .find(|r| r.ranking_name.eq_ignore_ascii_case(label.as_str()))
        .map(|r| r.ranking_value)
        .filter(|value| *value != 0)
        .ok_or(CatalogServiceError::RankingNotFound(label))
}
