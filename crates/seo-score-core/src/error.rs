//! Error types for seo-score-core.
//!
//! The analysis pipeline itself never fails: degraded input (empty body,
//! missing title, unset keyword) is scored with safe defaults. Errors only
//! arise at the edges, when loading configuration or parsing content
//! documents.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when reading content items.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The batch document is not a JSON array of content items.
    #[error("invalid content batch: {0}")]
    Parse(#[from] serde_json::Error),

    /// The batch document contains no items.
    #[error("content batch is empty")]
    EmptyBatch,
}

/// Result type alias using [`ContentError`].
pub type ContentResult<T> = Result<T, ContentError>;
