//! # Template Registry
//!
//! Immutable table of categories, styles and canonical questions with their
//! per-style response templates.
//!
//! The registry is built once at startup, either from the data embedded in
//! the binary or from a JSON/YAML file, and validated before anything is
//! served. After that it is only ever read, so it is shared behind an `Arc`
//! without any locking.

pub mod template_registry;
pub mod types;

pub use template_registry::TemplateRegistry;
pub use types::{CanonicalQuestion, Category, CategoryEntry, RegistryDocument, Style};
