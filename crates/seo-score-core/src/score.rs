//! Weighted SEO score aggregation.
//!
//! Each criterion contributes points independently; the total is capped
//! at 100. Weights:
//!
//! | Criterion | Points |
//! |---|---|
//! | Title length good / short or long / missing | 10 / 5 / 0 |
//! | Meta description good / short or long / missing | 10 / 5 / 0 |
//! | Keyword in title, meta description, first paragraph | 10 each |
//! | Keyword density good / low or high / not set | 10 / 5 / 0 |
//! | Readability ≥ 60 / ≥ 30 / below | 10 / 5 / 0 |
//! | Has headings, has images | 10 each |
//! | Internal links, outbound links | 5 each |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fields::LengthStatus;
use crate::keyword::DensityStatus;

/// Highest attainable score.
pub const MAX_SCORE: u8 = 100;

/// Points each criterion contributed to the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Title length points (max 10).
    pub title: u8,
    /// Meta description length points (max 10).
    pub meta_description: u8,
    /// Keyword in title (max 10).
    pub keyword_in_title: u8,
    /// Keyword in meta description (max 10).
    pub keyword_in_meta: u8,
    /// Keyword in first paragraph (max 10).
    pub keyword_in_first_paragraph: u8,
    /// Keyword density points (max 10).
    pub keyword_density: u8,
    /// Readability points (max 10).
    pub readability: u8,
    /// Headings present (max 10).
    pub headings: u8,
    /// Images present (max 10).
    pub images: u8,
    /// Internal links present (max 5).
    pub internal_links: u8,
    /// Outbound links present (max 5).
    pub outbound_links: u8,
}

impl ScoreBreakdown {
    /// Sum of all components, capped at [`MAX_SCORE`].
    pub fn total(&self) -> u8 {
        let sum: u32 = [
            self.title,
            self.meta_description,
            self.keyword_in_title,
            self.keyword_in_meta,
            self.keyword_in_first_paragraph,
            self.keyword_density,
            self.readability,
            self.headings,
            self.images,
            self.internal_links,
            self.outbound_links,
        ]
        .iter()
        .map(|&p| u32::from(p))
        .sum();

        u8::try_from(sum.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
    }
}

/// Inputs to the aggregator, gathered from the individual checks.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    /// Title length bucket.
    pub title_status: LengthStatus,
    /// Meta description length bucket.
    pub meta_status: LengthStatus,
    /// Keyword appears in the title.
    pub keyword_in_title: bool,
    /// Keyword appears in the meta description.
    pub keyword_in_meta: bool,
    /// Keyword appears in the first paragraph.
    pub keyword_in_first_paragraph: bool,
    /// Keyword density bucket.
    pub density_status: DensityStatus,
    /// Reading-ease score.
    pub readability_score: f64,
    /// Any heading present.
    pub has_headings: bool,
    /// Any image present.
    pub has_images: bool,
    /// Internal link count.
    pub internal_link_count: usize,
    /// Outbound link count.
    pub outbound_link_count: usize,
}

/// Compute the points for every criterion.
pub fn score(inputs: &ScoreInputs) -> ScoreBreakdown {
    ScoreBreakdown {
        title: length_points(inputs.title_status),
        meta_description: length_points(inputs.meta_status),
        keyword_in_title: flag_points(inputs.keyword_in_title, 10),
        keyword_in_meta: flag_points(inputs.keyword_in_meta, 10),
        keyword_in_first_paragraph: flag_points(inputs.keyword_in_first_paragraph, 10),
        keyword_density: density_points(inputs.density_status),
        readability: readability_points(inputs.readability_score),
        headings: flag_points(inputs.has_headings, 10),
        images: flag_points(inputs.has_images, 10),
        internal_links: flag_points(inputs.internal_link_count > 0, 5),
        outbound_links: flag_points(inputs.outbound_link_count > 0, 5),
    }
}

const fn length_points(status: LengthStatus) -> u8 {
    match status {
        LengthStatus::Good => 10,
        LengthStatus::Short | LengthStatus::Long => 5,
        LengthStatus::Missing => 0,
    }
}

const fn density_points(status: DensityStatus) -> u8 {
    match status {
        DensityStatus::Good => 10,
        DensityStatus::Low | DensityStatus::High => 5,
        DensityStatus::NotSet => 0,
    }
}

fn readability_points(score: f64) -> u8 {
    if score >= 60.0 {
        10
    } else if score >= 30.0 {
        5
    } else {
        0
    }
}

const fn flag_points(flag: bool, points: u8) -> u8 {
    if flag { points } else { 0 }
}
