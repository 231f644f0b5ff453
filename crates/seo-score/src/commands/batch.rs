//! Batch command — score every item in a JSON content file.
//!
//! The input is a JSON array of objects with `title`, `body`,
//! `meta_description`, `focus_keyword` and an optional `id`; missing fields
//! are treated as empty.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_score_core::analysis::{self, BatchResult};
use seo_score_core::{Config, content};

use super::{paint_score, read_input_file};

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of content items.
    pub file: Utf8PathBuf,

    /// Host the items are served from (decides internal vs outbound links).
    #[arg(long)]
    pub host: Option<String>,

    /// Minimum acceptable overall score for every item (0–100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Score every item in a batch file.
#[instrument(name = "cmd_batch", skip_all, fields(file = %args.file))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, host = ?args.host, "executing batch command");

    let json = read_input_file(&args.file, max_input_bytes)?;
    let items = content::parse_batch(&json)
        .with_context(|| format!("failed to parse batch file {}", args.file))?;

    let host = args.host.as_deref().unwrap_or_else(|| config.site_host());
    let min_score = args.min_score.or(config.min_score);

    let progress = if global_json || quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(items.len() as u64);
        bar.set_style(ProgressStyle::with_template(
            "{spinner} [{bar:30}] {pos}/{len} {msg}",
        )?);
        bar
    };
    let results = analysis::analyze_batch_with(&items, host, |result| {
        progress.set_message(result.label.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }

    if let Some(min) = min_score {
        let failing = below_minimum(&results, min);
        if !failing.is_empty() {
            bail!(
                "{} of {} items score below {}: {}",
                failing.len(),
                results.len(),
                min,
                failing.join(", "),
            );
        }
    }

    Ok(())
}

fn print_table(results: &[BatchResult]) {
    let width = results
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(4, 48);

    let header = format!("{:<width$}  {:>7}  {:>11}", "Item", "Score", "Readability");
    println!("{}", header.bold());
    for r in results {
        let label: String = r.label.chars().take(width).collect();
        let score = format!("{:>7}", format!("{}/100", r.report.overall_score));
        println!(
            "{:<width$}  {}  {:>11.1}",
            label,
            paint_score(r.report.overall_score, &score),
            r.report.readability_score,
        );
    }

    let total: u32 = results.iter().map(|r| u32::from(r.report.overall_score)).sum();
    let mean = f64::from(total) / results.len().max(1) as f64;
    println!("\n{} {:.1}", "Average:".dimmed(), mean);
}

/// Labels of the results scoring below `min`.
fn below_minimum(results: &[BatchResult], min: u8) -> Vec<&str> {
    results
        .iter()
        .filter(|r| r.report.overall_score < min)
        .map(|r| r.label.as_str())
        .collect()
}
