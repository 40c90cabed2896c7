//! # Holiday Question Helper
//!
//! Answers the awkward questions relatives ask over the holidays ("결혼은
//! 언제 하니?") with pre-authored responses in a chosen style.
//!
//! A question is classified into a category by keyword containment, matched
//! to a canonical question of that category, and answered with the
//! template for the requested style. Answers can be personalized with a few
//! facts about the user and come with the other questions of the category.
//!
//! - [`registry`]: the immutable table of categories, styles and templates
//! - [`engine`]: detection, matching, rendering, customization, similar questions
//! - [`envelope`] / [`service`]: structured replies and request-level operations
//! - [`server`] / [`mcp`]: HTTP and MCP surfaces

pub mod config;
pub mod engine;
pub mod envelope;
pub mod mcp;
pub mod registry;
pub mod server;
pub mod service;
pub mod translations;
pub mod utilities;

pub use engine::{CategorySelector, RenderedResponse, ResponseEngine, UserSituation};
pub use envelope::{ErrorReply, ResponseReply};
pub use registry::TemplateRegistry;
pub use service::HelperService;
pub use utilities::errors::{HelperError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
