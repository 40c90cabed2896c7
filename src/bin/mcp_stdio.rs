//! holiday-helper MCP server on stdin/stdout.
//!
//! Logs go to stderr; stdout carries only JSON-RPC responses.
//!
//! # Environment Variables
//!
//! - `HOLIDAY_RESPONSES_FILE`: JSON/YAML response data replacing the embedded set
//! - `RUST_LOG`: Tracing filter (default: "info,holiday_helper=debug")

use anyhow::Context;
use holiday_helper::config::{HelperConfig, DEFAULT_LOG_FILTER};
use holiday_helper::mcp::run_stdio;
use holiday_helper::service::HelperService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = HelperConfig::from_env();
    let service = HelperService::load(config.responses_file.as_deref())
        .context("failed to load response data")?;

    tracing::info!("MCP stdio server ready");
    run_stdio(service).await.context("MCP stdio session failed")?;
    Ok(())
}
