//! Content items submitted for analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// One post or page to score.
///
/// Every field defaults to the empty string, so a partially filled item
/// still analyzes (with a correspondingly low score).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContentSample {
    /// Page title.
    pub title: String,
    /// Body markup (HTML).
    pub body: String,
    /// Meta description.
    pub meta_description: String,
    /// Focus keyword; empty means not set.
    pub focus_keyword: String,
}

impl ContentSample {
    /// Build a sample from its four fields.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        meta_description: impl Into<String>,
        focus_keyword: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            meta_description: meta_description.into(),
            focus_keyword: focus_keyword.into(),
        }
    }
}

/// A content sample with an optional caller-supplied label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchItem {
    /// Identifier such as a slug or document id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The content to analyze.
    #[serde(flatten)]
    pub sample: ContentSample,
}

impl BatchItem {
    /// Label for display: the id, or the title, or the 1-based position.
    pub fn label(&self, index: usize) -> String {
        self.id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .or_else(|| {
                let title = self.sample.title.trim();
                (!title.is_empty()).then(|| title.to_string())
            })
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

/// Parse a JSON array of content items.
#[tracing::instrument(skip_all, fields(input_len = json.len()))]
pub fn parse_batch(json: &str) -> ContentResult<Vec<BatchItem>> {
    let items: Vec<BatchItem> = serde_json::from_str(json)?;
    if items.is_empty() {
        return Err(ContentError::EmptyBatch);
    }
    tracing::debug!(items = items.len(), "parsed content batch");
    Ok(items)
}
