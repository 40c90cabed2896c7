//! Model Context Protocol (MCP) tool server.
//!
//! Exposes the holiday helper operations as MCP tools over JSON-RPC 2.0,
//! either on stdin/stdout ([`stdio::run_stdio`]) or through the HTTP
//! server's `POST /mcp` route.

pub mod protocol;
pub mod stdio;
pub mod tools;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use stdio::run_stdio;
pub use tools::{dispatch_tool, handle_request, tool_definitions};
