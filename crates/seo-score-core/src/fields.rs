//! Title and meta-description length checks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Length-bucket classification for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LengthStatus {
    /// The field is empty.
    Missing,
    /// Below the recommended minimum.
    Short,
    /// Within the recommended range.
    Good,
    /// Above the recommended maximum.
    Long,
}

impl LengthStatus {
    /// Returns the status as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Short => "short",
            Self::Good => "good",
            Self::Long => "long",
        }
    }
}

impl std::fmt::Display for LengthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a field-length check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldCheck {
    /// Length in characters of the trimmed field.
    pub length: usize,
    /// Length bucket.
    pub status: LengthStatus,
    /// Fixed human-readable message for the bucket.
    pub message: String,
}

/// Recommended character range for a field.
struct LengthRange {
    min: usize,
    max: usize,
    missing: &'static str,
    short: &'static str,
    good: &'static str,
    long: &'static str,
}

const TITLE: LengthRange = LengthRange {
    min: 30,
    max: 60,
    missing: "Title is missing",
    short: "Title is too short (aim for 30-60 characters)",
    good: "Title length is good",
    long: "Title is too long and may be truncated in search results (aim for 30-60 characters)",
};

const META_DESCRIPTION: LengthRange = LengthRange {
    min: 100,
    max: 160,
    missing: "Meta description is missing",
    short: "Meta description is too short (aim for 100-160 characters)",
    good: "Meta description length is good",
    long: "Meta description is too long and may be truncated (aim for 100-160 characters)",
};

/// Check a page title against the 30–60 character range.
pub fn check_title(title: &str) -> FieldCheck {
    check_length(title, &TITLE)
}

/// Check a meta description against the 100–160 character range.
pub fn check_meta_description(meta: &str) -> FieldCheck {
    check_length(meta, &META_DESCRIPTION)
}

fn check_length(value: &str, range: &LengthRange) -> FieldCheck {
    let length = value.trim().chars().count();
    let (status, message) = if length == 0 {
        (LengthStatus::Missing, range.missing)
    } else if length < range.min {
        (LengthStatus::Short, range.short)
    } else if length > range.max {
        (LengthStatus::Long, range.long)
    } else {
        (LengthStatus::Good, range.good)
    };

    FieldCheck {
        length,
        status,
        message: message.to_string(),
    }
}
