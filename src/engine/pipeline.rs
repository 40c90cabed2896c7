//! The detect → match → render pipeline over a shared registry.

use std::fmt;
use std::sync::Arc;

use super::customizer::{customize, UserSituation};
use super::detector::detect_category;
use super::matcher::match_question;
use super::recommender::similar_questions;
use super::renderer::{render, validate_style, RenderedResponse};
use crate::registry::TemplateRegistry;
use crate::utilities::errors::{HelperError, Result};

/// Key of the category served by the dedicated marriage operation.
pub const MARRIAGE_CATEGORY: &str = "marriage";

/// How the category of a request is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelector {
    /// Detect from the question text.
    #[default]
    Auto,
    /// Use the given category key.
    Explicit(String),
}

impl CategorySelector {
    /// `"auto"` (any case, surrounding whitespace ignored) selects detection;
    /// anything else is taken as a category key.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("auto") {
            Self::Auto
        } else {
            Self::Explicit(value.to_string())
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Explicit(key) => write!(f, "{}", key),
        }
    }
}

/// Stateless response engine.
///
/// Cloning is cheap; every clone reads the same immutable registry.
#[derive(Debug, Clone)]
pub struct ResponseEngine {
    registry: Arc<TemplateRegistry>,
}

impl ResponseEngine {
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self { registry }
    }

    /// Engine over the embedded response data.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(TemplateRegistry::builtin()?)))
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Answer a question in a style.
    ///
    /// Validation order: style, then an explicit category, then (for
    /// detection only) a non-blank question.
    pub fn respond(
        &self,
        question: &str,
        style_key: &str,
        selector: &CategorySelector,
    ) -> Result<RenderedResponse> {
        validate_style(&self.registry, style_key)?;

        let category_key = match selector {
            CategorySelector::Auto => detect_category(&self.registry, question)?.key.as_str(),
            CategorySelector::Explicit(key) => self.validate_category(key)?,
        };

        let matched = match_question(&self.registry, category_key, question)?;
        render(&self.registry, category_key, &matched.text, style_key)
    }

    /// Answer a question as a marriage question, without detection.
    pub fn respond_marriage(&self, question: &str, style_key: &str) -> Result<RenderedResponse> {
        self.respond(
            question,
            style_key,
            &CategorySelector::Explicit(MARRIAGE_CATEGORY.to_string()),
        )
    }

    /// Append situational remarks to a rendered text.
    pub fn customize(&self, text: &str, situation: &UserSituation) -> String {
        customize(text, situation)
    }

    /// Other canonical questions in the same category.
    pub fn similar_questions(&self, category_key: &str, matched_question: &str) -> Result<Vec<String>> {
        similar_questions(&self.registry, category_key, matched_question)
    }

    /// Match a free-text question within the category, then list the other
    /// questions. Returns the matched canonical text with the list.
    pub fn similar_to(&self, category_key: &str, question: &str) -> Result<(String, Vec<String>)> {
        let matched = match_question(&self.registry, category_key, question)?;
        let similar = similar_questions(&self.registry, category_key, &matched.text)?;
        Ok((matched.text.clone(), similar))
    }

    fn validate_category<'a>(&self, key: &'a str) -> Result<&'a str> {
        if self.registry.category(key).is_some() {
            Ok(key)
        } else {
            Err(HelperError::InvalidCategory {
                category: key.to_string(),
                valid: self.registry.category_keys(),
            })
        }
    }
}
