//! Reading-ease scoring.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (spaces/words)`
//!
//! This is a Flesch-style ease score where the syllables-per-word term is
//! approximated by the ratio of spaces to words, so it needs no syllable
//! dictionary. Higher = easier. The result is clamped to `[0, 100]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markup;
use crate::text::{self, TextMetrics};

/// Reading-ease bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadabilityLevel {
    /// 90 and above.
    VeryEasy,
    /// 80 to 89.
    Easy,
    /// 70 to 79.
    FairlyEasy,
    /// 60 to 69.
    Standard,
    /// 50 to 59.
    FairlyDifficult,
    /// 30 to 49.
    Difficult,
    /// Below 30.
    VeryDifficult,
}

impl ReadabilityLevel {
    /// Bucket a reading-ease score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::Standard,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a standalone readability check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Reading-ease score, `0..=100`.
    pub score: f64,
    /// Bucketed level.
    pub level: ReadabilityLevel,
    /// Number of words detected.
    pub words: usize,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Minimum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Whether the score falls below the minimum.
    pub under_min: bool,
}

/// Compute the clamped reading-ease score for a body's metrics.
///
/// Text with no words scores 0. The formula alone would give an empty body
/// 206.8, clamped to 100, and so 10 readability points; returning 0 keeps
/// an all-empty item at an overall score of 0.
pub fn reading_ease(metrics: &TextMetrics) -> f64 {
    if metrics.word_count == 0 {
        return 0.0;
    }

    let words = metrics.word_count as f64;
    let words_per_sentence = words / metrics.sentence_count as f64;
    let spaces_per_word = metrics.space_count as f64 / words;

    let score = 1.015f64.mul_add(-words_per_sentence, 84.6f64.mul_add(-spaces_per_word, 206.835));
    text::round_to(score.clamp(0.0, 100.0), 1)
}

/// Check readability of a markup body.
///
/// # Arguments
///
/// * `markup` — Body markup; tags are stripped before scoring.
/// * `min_score` — Optional minimum acceptable reading-ease score.
#[tracing::instrument(skip(markup), fields(text_len = markup.len()))]
pub fn check_readability(markup: &str, min_score: Option<f64>) -> ReadabilityReport {
    let plain = markup::strip_tags(markup);
    let metrics = TextMetrics::from_plain(&plain);
    let score = reading_ease(&metrics);
    let under_min = min_score.is_some_and(|min| score < min);

    ReadabilityReport {
        score,
        level: ReadabilityLevel::from_score(score),
        words: metrics.word_count,
        sentences: metrics.sentence_count,
        min_score,
        under_min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds() {
        assert_eq!(ReadabilityLevel::from_score(100.0), ReadabilityLevel::VeryEasy);
        assert_eq!(ReadabilityLevel::from_score(90.0), ReadabilityLevel::VeryEasy);
        assert_eq!(ReadabilityLevel::from_score(89.9), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(70.0), ReadabilityLevel::FairlyEasy);
        assert_eq!(ReadabilityLevel::from_score(60.0), ReadabilityLevel::Standard);
        assert_eq!(
            ReadabilityLevel::from_score(55.0),
            ReadabilityLevel::FairlyDifficult
        );
        assert_eq!(ReadabilityLevel::from_score(30.0), ReadabilityLevel::Difficult);
        assert_eq!(
            ReadabilityLevel::from_score(29.9),
            ReadabilityLevel::VeryDifficult
        );
        assert_eq!(ReadabilityLevel::from_score(0.0), ReadabilityLevel::VeryDifficult);
    }

    #[test]
    fn empty_body_scores_zero() {
        let report = check_readability("", None);
        assert_eq!(report.words, 0);
        assert_eq!(report.sentences, 1);
        assert!(report.score.abs() < f64::EPSILON);
        assert_eq!(report.level, ReadabilityLevel::VeryDifficult);
    }

    #[test]
    fn short_sentences_clamp_to_one_hundred() {
        // 206.835 - 1.015 * 3 - 84.6 * (5 / 6) = 133.3, clamped.
        let report = check_readability("<p>The cat sat. The dog ran.</p>", None);
        assert_eq!(report.words, 6);
        assert_eq!(report.sentences, 2);
        assert!((report.score - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.level, ReadabilityLevel::VeryEasy);
    }

    #[test]
    fn one_long_sentence_scores_low() {
        let sentence = vec!["word"; 120].join(" ");
        let report = check_readability(&sentence, None);
        // 206.835 - 121.8 - 84.6 * (119 / 120) = 1.1
        assert!(report.score < 30.0);
        assert!(report.score >= 0.0);
        assert_eq!(report.level, ReadabilityLevel::VeryDifficult);
    }

    #[test]
    fn pathological_input_stays_in_range() {
        let run_on = vec!["x"; 5000].join(" ");
        for input in [run_on.as_str(), "!!!???...", "a", "<p></p><p> </p>"] {
            let report = check_readability(input, None);
            assert!((0.0..=100.0).contains(&report.score), "{input:?}");
        }
    }

    #[test]
    fn under_min_flag() {
        let sentence = vec!["word"; 120].join(" ");
        assert!(check_readability(&sentence, Some(60.0)).under_min);
        assert!(!check_readability("The cat sat.", Some(60.0)).under_min);
        assert!(!check_readability(&sentence, None).under_min);
    }

    #[test]
    fn level_display_labels() {
        assert_eq!(ReadabilityLevel::FairlyEasy.to_string(), "Fairly Easy");
        assert_eq!(ReadabilityLevel::VeryDifficult.to_string(), "Very Difficult");
    }
}
