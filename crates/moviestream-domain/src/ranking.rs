//! Ranking reference data and review sentiment labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Review-quality category derived from an admin review.
///
/// Ordered by desirability: `Excellent > Good > Okay > Bad > Terrible`.
/// Wire format is the capitalised name, which is also the `ranking_name`
/// of the matching ranking entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Excellent,
    Good,
    Okay,
    Bad,
    Terrible,
}

/// Returned when a string does not name a sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment label: {0}")]
pub struct UnknownSentimentLabel(pub String);

impl SentimentLabel {
    /// Every label, most desirable first.
    pub const ALL: [SentimentLabel; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Okay,
        Self::Bad,
        Self::Terrible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Bad => "Bad",
            Self::Terrible => "Terrible",
        }
    }

    /// Higher is better.
    fn desirability(self) -> u8 {
        match self {
            Self::Excellent => 4,
            Self::Good => 3,
            Self::Okay => 2,
            Self::Bad => 1,
            Self::Terrible => 0,
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = UnknownSentimentLabel;

    /// Case-insensitive, matching how ranking names are compared.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSentimentLabel(s.to_owned()))
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for SentimentLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SentimentLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.desirability().cmp(&other.desirability())
    }
}

/// Ranking reference entry: maps a label to its numeric rank value.
///
/// Lower values sort first in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub ranking_name: String,
    pub ranking_value: i32,
}

/// Label given to movies that have not been reviewed yet.
pub const NOT_RANKED: &str = "Not_Ranked";
