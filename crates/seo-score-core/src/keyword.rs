//! Focus keyword occurrence and density.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Density below this percentage is too low.
pub const DENSITY_LOW: f64 = 0.5;

/// Density above this percentage reads as keyword stuffing.
pub const DENSITY_HIGH: f64 = 3.0;

/// Keyword density classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DensityStatus {
    /// No focus keyword was supplied.
    NotSet,
    /// Below [`DENSITY_LOW`].
    Low,
    /// Within the recommended band.
    Good,
    /// Above [`DENSITY_HIGH`].
    High,
}

impl DensityStatus {
    /// Classify a density percentage for a keyword that is set.
    pub fn from_density(density: f64) -> Self {
        if density < DENSITY_LOW {
            Self::Low
        } else if density > DENSITY_HIGH {
            Self::High
        } else {
            Self::Good
        }
    }

    /// Returns the status as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotSet => "not-set",
            Self::Low => "low",
            Self::Good => "good",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for DensityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword occurrence analysis for one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordReport {
    /// The focus keyword as supplied (trimmed).
    pub keyword: String,
    /// Case-insensitive, non-overlapping occurrences in the body text.
    pub count: usize,
    /// `100 * count / words`, rounded to two decimals.
    pub density: f64,
    /// Density classification.
    pub status: DensityStatus,
}

/// Count the focus keyword in plain text and classify its density.
///
/// # Arguments
///
/// * `plain` — Body text with markup already stripped.
/// * `word_count` — Words in `plain`, the density denominator.
/// * `focus_keyword` — The keyword; empty means not set.
#[tracing::instrument(skip(plain), fields(text_len = plain.len()))]
pub fn analyze_keyword(plain: &str, word_count: usize, focus_keyword: &str) -> KeywordReport {
    let keyword = focus_keyword.trim();
    if keyword.is_empty() {
        return KeywordReport {
            keyword: String::new(),
            count: 0,
            density: 0.0,
            status: DensityStatus::NotSet,
        };
    }

    let count = count_occurrences(plain, keyword);
    let density = if word_count == 0 {
        0.0
    } else {
        text::round_to(count as f64 * 100.0 / word_count as f64, 2)
    };

    KeywordReport {
        keyword: keyword.to_string(),
        count,
        density,
        status: DensityStatus::from_density(density),
    }
}

/// Case-insensitive, non-overlapping substring occurrences.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    haystack.to_lowercase().matches(needle.as_str()).count()
}

/// Case-insensitive containment; an empty keyword never matches.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let keyword = keyword.trim().to_lowercase();
    !keyword.is_empty() && haystack.to_lowercase().contains(keyword.as_str())
}
