//! Keyword-based review sentiment.
//!
//! Matching is plain substring search on the lower-cased review, so
//! "badly" counts as "bad". Each keyword counts at most once per review.

use moviestream_domain::ranking::SentimentLabel;

const EXCELLENT_KEYWORDS: &[&str] = &[
    "excellent",
    "outstanding",
    "masterpiece",
    "brilliant",
    "amazing",
    "fantastic",
    "superb",
    "phenomenal",
    "incredible",
    "perfect",
    "magnificent",
    "extraordinary",
    "exceptional",
    "stunning",
    "wonderful",
];

const GOOD_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "nice",
    "enjoyable",
    "solid",
    "decent",
    "fine",
    "satisfying",
    "pleasant",
    "impressive",
    "entertaining",
    "compelling",
];

const BAD_KEYWORDS: &[&str] = &[
    "bad",
    "poor",
    "weak",
    "disappointing",
    "mediocre",
    "boring",
    "dull",
    "lackluster",
    "uninspired",
    "forgettable",
    "waste",
];

const TERRIBLE_KEYWORDS: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "worst",
    "pathetic",
    "garbage",
    "trash",
    "atrocious",
    "abysmal",
    "dreadful",
    "unwatchable",
];

/// Number of distinct keywords from each tier found in a review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordScores {
    pub excellent: usize,
    pub good: usize,
    pub bad: usize,
    pub terrible: usize,
}

fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

impl KeywordScores {
    pub fn score(review: &str) -> Self {
        let text = review.to_lowercase();
        Self {
            excellent: count_matches(&text, EXCELLENT_KEYWORDS),
            good: count_matches(&text, GOOD_KEYWORDS),
            bad: count_matches(&text, BAD_KEYWORDS),
            terrible: count_matches(&text, TERRIBLE_KEYWORDS),
        }
    }

    pub fn positive(&self) -> usize {
        self.excellent + self.good
    }

    pub fn negative(&self) -> usize {
        self.bad + self.terrible
    }

    /// Pick a label from the scores.
    ///
    /// The stronger tier wins ties within the winning side; a side with no
    /// tier hits, or a draw between sides, lands on `Okay`.
    pub fn label(&self) -> SentimentLabel {
        use std::cmp::Ordering;

        match self.positive().cmp(&self.negative()) {
            Ordering::Greater if self.excellent >= self.good && self.excellent > 0 => {
                SentimentLabel::Excellent
            }
            Ordering::Greater if self.good > 0 => SentimentLabel::Good,
            Ordering::Less if self.terrible >= self.bad && self.terrible > 0 => {
                SentimentLabel::Terrible
            }
            Ordering::Less if self.bad > 0 => SentimentLabel::Bad,
            _ => SentimentLabel::Okay,
        }
    }
}

/// Classify a free-text admin review.
pub fn classify(review: &str) -> SentimentLabel {
    let scores = KeywordScores::score(review);
    let label = scores.label();
    tracing::debug!(
        excellent = scores.excellent,
        good = scores.good,
        bad = scores.bad,
        terrible = scores.terrible,
        %label,
        "classified review"
    );
    label
}
