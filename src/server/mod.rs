//! HTTP server for the holiday helper.
//!
//! # Endpoints
//!
//! - `GET  /health`, `GET /categories`
//! - `POST /respond`, `POST /respond/marriage`
//! - `POST /customize`, `POST /similar`
//! - `POST /mcp`: MCP JSON-RPC

pub mod routes;

pub use routes::{app_router, AppState};
