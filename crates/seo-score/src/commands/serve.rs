//! Serve command — MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use seo_score_core::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Default serving host for link classification (overrides config).
    #[arg(long)]
    pub host: Option<String>,
}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol; all logging goes to stderr or the log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let host = args
        .host
        .unwrap_or_else(|| config.site_host().to_string());
    info!(host = %host, max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let server = ProjectServer::new()
        .with_default_host(host)
        .with_max_input_bytes(max_input_bytes);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service.waiting().await.context("MCP server task failed")?;

    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
