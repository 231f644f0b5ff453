//! Analyze command — SEO score for one post or page.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_score_core::analysis::{self, AnalysisReport};
use seo_score_core::fields::{FieldCheck, LengthStatus};
use seo_score_core::keyword::DensityStatus;
use seo_score_core::{Config, ContentSample};

use super::{colored_score, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// HTML body file to analyze.
    pub file: Utf8PathBuf,

    /// Page title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Meta description.
    #[arg(long, default_value = "")]
    pub meta: String,

    /// Focus keyword.
    #[arg(long, short = 'k', default_value = "")]
    pub keyword: String,

    /// Host the page is served from (decides internal vs outbound links).
    #[arg(long)]
    pub host: Option<String>,

    /// Minimum acceptable overall score (0–100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Score one content item read from a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, host = ?args.host, "executing analyze command");

    let body = read_input_file(&args.file, max_input_bytes)?;
    let host = args.host.as_deref().unwrap_or_else(|| config.site_host());
    let min_score = args.min_score.or(config.min_score);

    let sample = ContentSample::new(args.title, body, args.meta, args.keyword);
    let report = analysis::analyze_content(&sample, host);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    if let Some(min) = min_score
        && report.overall_score < min
    {
        bail!(
            "{} scores {} (min: {}). Work through the recommendations above.",
            args.file,
            report.overall_score,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &AnalysisReport) {
    println!(
        "{} {}",
        file.bold(),
        colored_score(report.overall_score).bold()
    );

    println!(
        "\n  {} {:.1} ({}), {} words, {} sentences, {:.1} words/sentence",
        "Readability:".cyan(),
        report.readability_score,
        report.readability_level,
        report.word_count,
        report.sentence_count,
        report.avg_words_per_sentence,
    );

    let kw = &report.keyword;
    if kw.status == DensityStatus::NotSet {
        println!("  {} {}", "Keyword:".cyan(), "(not set)".dimmed());
    } else {
        println!(
            "  {} \"{}\" x{}, density {:.2}% ({})",
            "Keyword:".cyan(),
            kw.keyword,
            kw.count,
            kw.density,
            kw.status,
        );
        println!(
            "  {} title {}, meta {}, first paragraph {}",
            "Placement:".cyan(),
            mark(report.keyword_in_title),
            mark(report.keyword_in_meta),
            mark(report.keyword_in_first_paragraph),
        );
    }

    print_field("Title:", &report.title);
    print_field("Meta:", &report.meta_description);

    println!(
        "  {} headings {}, images {}, {} internal / {} outbound links",
        "Structure:".cyan(),
        mark(report.has_headings),
        mark(report.has_images),
        report.internal_link_count,
        report.outbound_link_count,
    );

    if !report.recommendations.is_empty() {
        println!("\n  {}", "Recommendations:".yellow());
        for rec in &report.recommendations {
            println!("    - {rec}");
        }
    }
}

fn print_field(label: &str, check: &FieldCheck) {
    let status = match check.status {
        LengthStatus::Good => check.status.as_str().green().to_string(),
        LengthStatus::Short | LengthStatus::Long => check.status.as_str().yellow().to_string(),
        LengthStatus::Missing => check.status.as_str().red().to_string(),
    };
    println!(
        "  {} {} chars, {} ({})",
        label.cyan(),
        check.length,
        status,
        check.message,
    );
}

fn mark(present: bool) -> String {
    if present {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}
