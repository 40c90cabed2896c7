//! holiday-helper HTTP server binary.
//!
//! Starts an axum HTTP server exposing the answer, listing and MCP endpoints.
//!
//! # Environment Variables
//!
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: HTTP port (default: 8080)
//! - `HOLIDAY_RESPONSES_FILE`: JSON/YAML response data replacing the embedded set
//! - `RUST_LOG`: Tracing filter (default: "info,holiday_helper=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use anyhow::Context;
use holiday_helper::config::{HelperConfig, DEFAULT_LOG_FILTER};
use holiday_helper::server::{app_router, AppState};
use holiday_helper::service::HelperService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = HelperConfig::from_env();

    // An invalid registry must stop the process before anything is served.
    let service = HelperService::load(config.responses_file.as_deref())
        .context("failed to load response data")?;

    let app = app_router(AppState::new(service));
    let bind_addr = config.bind_addr();

    tracing::info!("holiday-helper server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health           : liveness probe");
    tracing::info!("  GET  /categories       : categories, styles, examples");
    tracing::info!("  POST /respond          : answer a question");
    tracing::info!("  POST /respond/marriage : answer a marriage question");
    tracing::info!("  POST /customize        : personalize an answer");
    tracing::info!("  POST /similar          : related questions");
    tracing::info!("  POST /mcp              : MCP JSON-RPC");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
