//! Core library for seo-score.
//!
//! This crate provides the SEO content-scoring pipeline used by the
//! `seo-score` CLI and MCP server, plus configuration loading.
//!
//! # Modules
//!
//! - [`analysis`] - [`analyze_content`] and the [`AnalysisReport`] it produces
//! - [`markup`], [`text`] - Markup stripping and text metrics
//! - [`readability`], [`keyword`], [`fields`], [`structure`] - Individual checks
//! - [`score`] - Weighted aggregation
//! - [`content`] - Content items and batch documents
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use seo_score_core::{ContentSample, analyze_content};
//!
//! let sample = ContentSample::new(
//!     "A Beginner's Guide to Brewing Pour-Over Coffee",
//!     "<h2>Gear</h2><p>Pour-over coffee needs a kettle and a dripper.</p>",
//!     "",
//!     "pour-over",
//! );
//! let report = analyze_content(&sample, "blog.example.com");
//! assert!(report.overall_score <= 100);
//! assert!(report.keyword_in_title);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod content;
pub mod error;
pub mod fields;
pub mod keyword;
pub mod markup;
pub mod readability;
pub mod score;
pub mod structure;
pub mod text;

pub use analysis::{
    AnalysisReport, BatchResult, analyze_batch, analyze_batch_with, analyze_content,
};
pub use config::{Config, ConfigLoader, LogLevel};
pub use content::{BatchItem, ContentSample};

pub use error::{ConfigError, ConfigResult, ContentError, ContentResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
