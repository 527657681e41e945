//! MCP server launcher
//!
//! Starts the MCP server over stdio.

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use crate::config::load_config;
use crate::mcp::TargetdocServer;

/// Run the MCP server over stdio until the client disconnects.
///
/// # Arguments
/// * `config_path` - Optional path to a config file override
pub async fn run_mcp_server(config_path: Option<&str>) -> Result<()> {
    // Paths are interpolated per call, after tool overrides
    let config = load_config(config_path).context("Failed to load configuration")?;

    let server = TargetdocServer::with_config(config);

    let transport = (stdin(), stdout());
    tracing::info!("targetdoc MCP server starting (stdio transport)");

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
