//! Suggested fixes derived from a score breakdown.

use crate::fields::LengthStatus;
use crate::keyword::DensityStatus;

use super::reports::AnalysisReport;

/// List a fix for every criterion that did not earn full points.
///
/// Order follows the score table so output is stable.
pub fn recommendations(report: &AnalysisReport) -> Vec<String> {
    let mut out = Vec::new();
    let keyword_set = report.keyword.status != DensityStatus::NotSet;

    if report.title.status != LengthStatus::Good {
        out.push(report.title.message.clone());
    }
    if report.meta_description.status != LengthStatus::Good {
        out.push(report.meta_description.message.clone());
    }

    if !keyword_set {
        out.push("Set a focus keyword to enable keyword checks".to_string());
    } else {
        if !report.keyword_in_title {
            out.push("Use the focus keyword in the title".to_string());
        }
        if !report.keyword_in_meta {
            out.push("Use the focus keyword in the meta description".to_string());
        }
        if !report.keyword_in_first_paragraph {
            out.push("Use the focus keyword in the first paragraph".to_string());
        }
        match report.keyword.status {
            DensityStatus::Low => out.push(format!(
                "Keyword density is low ({:.2}%); use the keyword more often",
                report.keyword.density
            )),
            DensityStatus::High => out.push(format!(
                "Keyword density is high ({:.2}%); avoid keyword stuffing",
                report.keyword.density
            )),
            DensityStatus::Good | DensityStatus::NotSet => {}
        }
    }

    if report.breakdown.readability < 10 {
        out.push(format!(
            "Readability is {} ({:.1}); use shorter sentences",
            report.readability_level, report.readability_score
        ));
    }
    if !report.has_headings {
        out.push("Add subheadings to structure the content".to_string());
    }
    if !report.has_images {
        out.push("Add at least one image".to_string());
    }
    if report.internal_link_count == 0 {
        out.push("Link to other pages on this site".to_string());
    }
    if report.outbound_link_count == 0 {
        out.push("Link to at least one external source".to_string());
    }

    out
}
