//! Report structs for content analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fields::FieldCheck;
use crate::keyword::KeywordReport;
use crate::readability::ReadabilityLevel;
use crate::score::ScoreBreakdown;

/// Full SEO analysis of one content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Words in the body after stripping markup.
    pub word_count: usize,
    /// Estimated sentences, at least 1.
    pub sentence_count: usize,
    /// Average words per sentence, one decimal.
    pub avg_words_per_sentence: f64,
    /// Reading-ease score, `0..=100`.
    pub readability_score: f64,
    /// Bucketed reading-ease level.
    pub readability_level: ReadabilityLevel,
    /// Focus keyword count, density, and status.
    pub keyword: KeywordReport,
    /// Title length check.
    pub title: FieldCheck,
    /// Meta description length check.
    pub meta_description: FieldCheck,
    /// Focus keyword appears in the title.
    pub keyword_in_title: bool,
    /// Focus keyword appears in the meta description.
    pub keyword_in_meta: bool,
    /// Focus keyword appears in the first paragraph.
    pub keyword_in_first_paragraph: bool,
    /// Body contains a heading.
    pub has_headings: bool,
    /// Body contains an image.
    pub has_images: bool,
    /// Links to the serving host.
    pub internal_link_count: usize,
    /// Links to other hosts.
    pub outbound_link_count: usize,
    /// Weighted score, `0..=100`.
    pub overall_score: u8,
    /// Points per criterion.
    pub breakdown: ScoreBreakdown,
    /// Suggested fixes, one per criterion short of full points.
    pub recommendations: Vec<String>,
}

/// Result for one item of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchResult {
    /// Display label (id, title, or position).
    pub label: String,
    /// The item's analysis.
    pub report: AnalysisReport,
}
