//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scoring pipeline over MCP so AI assistants and editor
//! integrations can score drafts through the stdio transport.
//!
//! # Architecture
//!
//! The server is a presentation layer over the same core library the CLI
//! commands use. Each `#[tool]` method delegates to `seo_score_core` and
//! only handles parameter decoding, input limits, and JSON encoding.
//!
//! # Tools
//!
//! - `get_info`: package name, version, description
//! - `analyze_content`: full SEO report for one content item
//! - `check_readability`: reading-ease score for a body

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use seo_score_core::{ContentSample, analysis, readability};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeContentParams {
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// HTML body as produced by the editor.
    #[serde(default)]
    pub body: String,
    /// Meta description.
    #[serde(default)]
    pub meta_description: String,
    /// Focus keyword; leave empty to skip keyword checks.
    #[serde(default)]
    pub focus_keyword: String,
    /// Host the page is served from. Defaults to the server's configured host.
    pub host: Option<String>,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// HTML or plain text to score.
    pub body: String,
    /// Minimum acceptable reading-ease score (0-100).
    pub min_score: Option<f64>,
}

/// MCP server exposing SEO scoring to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    default_host: String,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectServer {
    /// Host used when a tool call does not name one.
    #[must_use]
    pub fn with_default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = host.into();
        self
    }

    /// Reject tool inputs larger than `max` bytes (`None` disables the check).
    #[must_use]
    pub fn with_max_input_bytes(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    fn check_input_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with no default host and the
    /// default input limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            default_host: String::new(),
            max_input_bytes: Some(seo_score_core::DEFAULT_MAX_INPUT_BYTES),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score one content item for SEO.
    #[tool(
        description = "Score a post or page for SEO (0-100). Checks title and meta description length, focus keyword placement and density, readability, headings, images, and internal/outbound links. Returns the full report with a per-criterion breakdown and recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", body_len = params.body.len()))]
    fn analyze_content(
        &self,
        Parameters(params): Parameters<AnalyzeContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_content", host = ?params.host, "executing MCP tool");

        let total = params.title.len()
            + params.body.len()
            + params.meta_description.len()
            + params.focus_keyword.len();
        self.check_input_size(total)?;

        let host = params
            .host
            .as_deref()
            .unwrap_or(self.default_host.as_str());
        let sample = ContentSample::new(
            params.title,
            params.body,
            params.meta_description,
            params.focus_keyword,
        );
        let report = analysis::analyze_content(&sample, host);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_content",
            score = report.overall_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score reading ease of a body.
    #[tool(
        description = "Check readability of HTML or plain text. Returns a 0-100 reading-ease score (higher is easier), its level, and word/sentence counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", body_len = params.body.len()))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_readability", min_score = ?params.min_score, "executing MCP tool");

        self.check_input_size(params.body.len())?;

        let report = readability::check_readability(&params.body, params.min_score);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "check_readability",
            score = report.score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_content to score a draft before publishing.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
