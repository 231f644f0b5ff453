//! SEO content analysis.
//!
//! Runs the scoring pipeline for one content item: strip markup, measure
//! the text, check keyword placement and density, check field lengths and
//! structure, then aggregate into a 0–100 score.
//!
//! Every stage is a pure function in its own module; [`analyze_content`]
//! only wires them together. Nothing here can fail: empty or missing
//! fields produce a low-scoring but fully populated report.

pub mod recommendations;
pub mod reports;

pub use recommendations::recommendations;
pub use reports::{AnalysisReport, BatchResult};

use crate::content::{BatchItem, ContentSample};
use crate::fields;
use crate::keyword;
use crate::markup;
use crate::readability::{self, ReadabilityLevel};
use crate::score::{self, ScoreInputs};
use crate::structure;
use crate::text::TextMetrics;

/// Analyze one content item.
///
/// # Arguments
///
/// * `sample` — Title, body markup, meta description, and focus keyword.
/// * `current_host` — Serving host; `http(s)://` links to other hosts are
///   outbound. Pass `""` when unknown.
#[tracing::instrument(
    skip(sample),
    fields(body_len = sample.body.len(), has_keyword = !sample.focus_keyword.trim().is_empty())
)]
pub fn analyze_content(sample: &ContentSample, current_host: &str) -> AnalysisReport {
    let plain = markup::strip_tags(&sample.body);
    let metrics = TextMetrics::from_plain(&plain);
    let readability_score = readability::reading_ease(&metrics);

    let keyword = keyword::analyze_keyword(&plain, metrics.word_count, &sample.focus_keyword);
    let title = fields::check_title(&sample.title);
    let meta_description = fields::check_meta_description(&sample.meta_description);
    let keyword_in_title = keyword::contains_keyword(&sample.title, &sample.focus_keyword);
    let keyword_in_meta =
        keyword::contains_keyword(&sample.meta_description, &sample.focus_keyword);
    let structure = structure::check_structure(&sample.body, &sample.focus_keyword, current_host);

    let breakdown = score::score(&ScoreInputs {
        title_status: title.status,
        meta_status: meta_description.status,
        keyword_in_title,
        keyword_in_meta,
        keyword_in_first_paragraph: structure.keyword_in_first_paragraph,
        density_status: keyword.status,
        readability_score,
        has_headings: structure.has_headings,
        has_images: structure.has_images,
        internal_link_count: structure.internal_link_count,
        outbound_link_count: structure.outbound_link_count,
    });
    let overall_score = breakdown.total();

    let mut report = AnalysisReport {
        word_count: metrics.word_count,
        sentence_count: metrics.sentence_count,
        avg_words_per_sentence: metrics.avg_words_per_sentence,
        readability_score,
        readability_level: ReadabilityLevel::from_score(readability_score),
        keyword,
        title,
        meta_description,
        keyword_in_title,
        keyword_in_meta,
        keyword_in_first_paragraph: structure.keyword_in_first_paragraph,
        has_headings: structure.has_headings,
        has_images: structure.has_images,
        internal_link_count: structure.internal_link_count,
        outbound_link_count: structure.outbound_link_count,
        overall_score,
        breakdown,
        recommendations: Vec::new(),
    };
    report.recommendations = recommendations(&report);

    tracing::debug!(
        overall_score,
        words = report.word_count,
        "content analyzed"
    );
    report
}

/// Analyze every item of a batch independently, preserving input order.
pub fn analyze_batch(items: &[BatchItem], current_host: &str) -> Vec<BatchResult> {
    analyze_batch_with(items, current_host, |_| {})
}

/// [`analyze_batch`], calling `on_result` as each item finishes.
#[tracing::instrument(skip(items, on_result), fields(items = items.len()))]
pub fn analyze_batch_with<F>(
    items: &[BatchItem],
    current_host: &str,
    mut on_result: F,
) -> Vec<BatchResult>
where
    F: FnMut(&BatchResult),
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let result = BatchResult {
                label: item.label(index),
                report: analyze_content(&item.sample, current_host),
            };
            on_result(&result);
            result
        })
        .collect()
}
