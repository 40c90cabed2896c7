//! Structured replies around engine results.
//!
//! Every reply carries a UTC timestamp in `%Y-%m-%dT%H:%M:%SZ` form. Engine
//! errors are converted into [`ErrorReply`] values here and nowhere else.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::engine::{RenderedResponse, UserSituation};
use crate::registry::{Category, Style, TemplateRegistry};
use crate::utilities::errors::{HelperError, Result};

/// Disclaimer attached to every generated answer.
pub const DISCLAIMER: &str =
    "⚠️ 이 답변은 유머를 위한 것입니다. 실제 상황과 가족 관계를 고려해서 적절히 사용하세요.";

/// Label for faults that are not one of the engine's error kinds.
pub const SYSTEM_ERROR_LABEL: &str = "시스템 오류";

/// Current UTC time in reply format.
pub fn timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// A generated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseReply {
    pub question: String,
    pub matched_question: String,
    /// Category display name.
    pub category: String,
    pub category_key: String,
    /// Style display name.
    pub style: String,
    pub style_key: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similar_questions: Vec<String>,
    pub timestamp: String,
    pub disclaimer: String,
}

impl ResponseReply {
    /// Wrap a rendered response, resolving display names from the registry.
    pub fn from_rendered(
        registry: &TemplateRegistry,
        question: &str,
        rendered: RenderedResponse,
    ) -> Result<Self> {
        let category = registry
            .category(&rendered.category_key)
            .ok_or_else(|| HelperError::InvalidCategory {
                category: rendered.category_key.clone(),
                valid: registry.category_keys(),
            })?;
        let style = registry
            .style(&rendered.style_key)
            .ok_or_else(|| HelperError::InvalidStyle {
                style: rendered.style_key.clone(),
                valid: registry.style_keys(),
            })?;

        Ok(Self {
            question: question.to_string(),
            matched_question: rendered.matched_question,
            category: category.display_name.clone(),
            category_key: rendered.category_key,
            style: style.display_name.clone(),
            style_key: rendered.style_key,
            response: rendered.text,
            similar_questions: Vec::new(),
            timestamp: timestamp(),
            disclaimer: DISCLAIMER.to_string(),
        })
    }

    pub fn with_similar_questions(mut self, similar: Vec<String>) -> Self {
        self.similar_questions = similar;
        self
    }
}

/// A customized answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizedReply {
    pub original: String,
    pub customized: String,
    pub situation: UserSituation,
    pub timestamp: String,
}

impl CustomizedReply {
    pub fn new(original: &str, customized: String, situation: UserSituation) -> Self {
        Self {
            original: original.to_string(),
            customized,
            situation,
            timestamp: timestamp(),
        }
    }
}

/// Related questions for a matched question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarReply {
    pub category_key: String,
    pub question: String,
    /// Canonical question the input was matched to; excluded from the list.
    pub matched_question: String,
    pub similar_questions: Vec<String>,
    pub timestamp: String,
}

impl SimilarReply {
    pub fn new(
        category_key: &str,
        question: &str,
        matched_question: String,
        similar_questions: Vec<String>,
    ) -> Self {
        Self {
            category_key: category_key.to_string(),
            question: question.to_string(),
            matched_question,
            similar_questions,
            timestamp: timestamp(),
        }
    }
}

/// Example questions of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExamples {
    pub category_key: String,
    pub category: String,
    pub questions: Vec<String>,
}

/// Straight listing of the registry contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReply {
    pub categories: Vec<Category>,
    pub styles: Vec<Style>,
    pub examples: Vec<CategoryExamples>,
    pub total_categories: usize,
    pub total_styles: usize,
    pub timestamp: String,
}

impl CatalogReply {
    pub fn from_registry(registry: &TemplateRegistry) -> Self {
        let categories: Vec<Category> = registry.categories().cloned().collect();
        let styles = registry.styles().to_vec();
        let examples = registry
            .entries()
            .iter()
            .map(|entry| CategoryExamples {
                category_key: entry.category.key.clone(),
                category: entry.category.display_name.clone(),
                questions: entry.questions.iter().map(|q| q.text.clone()).collect(),
            })
            .collect();

        Self {
            total_categories: categories.len(),
            total_styles: styles.len(),
            categories,
            styles,
            examples,
            timestamp: timestamp(),
        }
    }
}

/// A failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    /// Short user-facing label (e.g. "입력 오류").
    pub error: String,
    /// Error kind name (e.g. "InvalidStyleError").
    pub kind: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorReply {
    /// Catch-all reply for faults outside the engine's error kinds.
    pub fn system(message: impl std::fmt::Display) -> Self {
        Self {
            error: SYSTEM_ERROR_LABEL.to_string(),
            kind: "SystemError".to_string(),
            message: format!("예상치 못한 오류가 발생했습니다: {}", message),
            timestamp: timestamp(),
        }
    }
}

impl From<&HelperError> for ErrorReply {
    fn from(err: &HelperError) -> Self {
        Self {
            error: err.label().to_string(),
            kind: err.kind().to_string(),
            message: err.to_string(),
            timestamp: timestamp(),
        }
    }
}

impl From<HelperError> for ErrorReply {
    fn from(err: HelperError) -> Self {
        Self::from(&err)
    }
}
