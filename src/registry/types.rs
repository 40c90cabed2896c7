//! Registry record types and the on-disk data document.
//!
//! The data document is what `responses.json` (or a replacement file named
//! by `HOLIDAY_RESPONSES_FILE`) deserializes into:
//!
//! ```yaml
//! default_category: marriage
//! styles:
//!   - { key: humorous, display_name: "유머러스" }
//! categories:
//!   - key: marriage
//!     display_name: "결혼 관련"
//!     keywords: ["결혼", "소개팅"]
//!     questions:
//!       - text: "결혼은 언제 하니?"
//!         templates:
//!           humorous: "제 결혼식 날짜는 저도 제일 궁금해요."
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A topic grouping of interview-style questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key (e.g. `"marriage"`).
    pub key: String,
    /// Human-readable name shown in replies.
    pub display_name: String,
}

/// A rhetorical tone a response can be rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Stable key (e.g. `"humorous"`).
    pub key: String,
    /// Human-readable name shown in replies.
    pub display_name: String,
}

/// A pre-authored question with one response template per style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalQuestion {
    pub text: String,
    /// Style key -> response text.
    pub templates: HashMap<String, String>,
}

impl CanonicalQuestion {
    /// Template text for a style, if authored.
    pub fn template(&self, style_key: &str) -> Option<&str> {
        self.templates.get(style_key).map(String::as_str)
    }
}

/// One category with its detection keywords and canonical questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(flatten)]
    pub category: Category,
    /// Trigger keywords, in the order they are checked.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Canonical questions in authoring order.
    #[serde(default)]
    pub questions: Vec<CanonicalQuestion>,
}

/// Serialized form of a whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDocument {
    /// Category used when detection finds no keyword.
    pub default_category: String,
    pub styles: Vec<Style>,
    /// Categories in detection order.
    pub categories: Vec<CategoryEntry>,
}
