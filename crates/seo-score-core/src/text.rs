//! Text metrics over stripped plain text.
//!
//! Provides word, sentence, and space counting for the readability and
//! keyword stages. All counts are computed from the output of
//! [`markup::strip_tags`](crate::markup::strip_tags).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Counts derived from a body's plain text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Estimated sentences, never less than 1.
    pub sentence_count: usize,
    /// Literal space characters.
    pub space_count: usize,
    /// `word_count / sentence_count`, rounded to one decimal.
    pub avg_words_per_sentence: f64,
}

impl TextMetrics {
    /// Compute metrics for already-stripped plain text.
    #[tracing::instrument(skip_all, fields(text_len = plain.len()))]
    pub fn from_plain(plain: &str) -> Self {
        let word_count = count_words(plain);
        let sentence_count = count_sentences(plain);
        let space_count = count_spaces(plain);

        let avg_words_per_sentence = if word_count == 0 {
            0.0
        } else {
            round_to(word_count as f64 / sentence_count as f64, 1)
        };

        Self {
            word_count,
            sentence_count,
            space_count,
            avg_words_per_sentence,
        }
    }
}

/// Count words by whitespace splitting.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate sentences from terminal punctuation.
///
/// A run of `.`, `!`, or `?` ends a sentence unless a word character
/// follows it directly, so `3.14`, `e.g.x` and `example.com` do not split
/// while `Really?!` counts once. The result is floored at 1.
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }
        while chars.peek().copied().is_some_and(is_sentence_terminator) {
            chars.next();
        }
        if !chars.peek().copied().is_some_and(is_word_char) {
            count += 1;
        }
    }

    count.max(1)
}

/// Count literal space characters (not tabs or newlines).
pub fn count_spaces(text: &str) -> usize {
    text.chars().filter(|&c| c == ' ').count()
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
