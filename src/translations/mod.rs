//! Authored response data.
//!
//! The default categories, styles, detection keywords and response
//! templates (Korean) are kept in `responses.json` and embedded at compile
//! time. [`crate::registry::TemplateRegistry::builtin`] parses and validates
//! them at startup.

/// Raw response data JSON, embedded at compile time.
pub const RESPONSES_JSON: &str = include_str!("responses.json");
