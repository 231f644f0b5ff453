//! Readability command — reading-ease score for a content body.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_score_core::readability;

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// HTML or plain-text file to score.
    pub file: Utf8PathBuf,

    /// Minimum acceptable reading-ease score (0–100).
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Score reading ease of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let report = readability::check_readability(&content, min_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(min) = report.min_score
        && !report.under_min
    {
        println!(
            "{} {} scores {:.1} ({}, min: {:.0})",
            "PASS:".green(),
            args.file,
            report.score,
            report.level,
            min,
        );
    } else if report.min_score.is_none() {
        println!("{:.1} ({})", report.score, report.level);
    }

    if report.under_min {
        let min = report.min_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.1} (min: {:.0}). Shorten sentences and paragraphs.",
            args.file,
            report.score,
            min,
        );
    }

    Ok(())
}
