//! Request-level operations shared by the HTTP and MCP surfaces.
//!
//! Each operation takes a typed request, drives the [`ResponseEngine`] and
//! returns either a reply or an [`ErrorReply`]. This is the only layer that
//! turns engine errors into user-visible messages.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::{CategorySelector, ResponseEngine, UserSituation};
use crate::envelope::{
    CatalogReply, CategoryExamples, CustomizedReply, ErrorReply, ResponseReply, SimilarReply,
};
use crate::registry::TemplateRegistry;
use crate::utilities::errors::{HelperError, Result};

fn default_style() -> String {
    "humorous".to_string()
}

fn default_category() -> String {
    "auto".to_string()
}

/// Arguments of the dedicated marriage operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarriageRequest {
    pub question: String,
    #[serde(default = "default_style")]
    pub style: String,
}

/// Arguments of the general answer operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRequest {
    pub question: String,
    #[serde(default = "default_style")]
    pub style: String,
    /// `"auto"` or a category key.
    #[serde(default = "default_category")]
    pub category: String,
    /// Also list the other questions of the matched category.
    #[serde(default)]
    pub include_similar: bool,
    /// Optional facts to append to the answer.
    #[serde(default)]
    pub situation: Option<UserSituation>,
}

impl ResponseRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            style: default_style(),
            category: default_category(),
            include_similar: false,
            situation: None,
        }
    }
}

/// Arguments of the customization operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizeRequest {
    /// Previously rendered response text.
    pub response: String,
    #[serde(flatten)]
    pub situation: UserSituation,
}

/// Arguments of the similar-question operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarRequest {
    pub category: String,
    pub question: String,
}

/// Outcome of one request.
pub type Reply<T> = std::result::Result<T, ErrorReply>;

/// Facade over the engine used by every outer surface.
#[derive(Debug, Clone)]
pub struct HelperService {
    engine: ResponseEngine,
}

impl HelperService {
    pub fn new(engine: ResponseEngine) -> Self {
        Self { engine }
    }

    /// Build the service from a registry file, or the embedded data.
    pub fn load(responses_file: Option<&Path>) -> Result<Self> {
        let registry = TemplateRegistry::load(responses_file)?;
        Ok(Self::new(ResponseEngine::new(Arc::new(registry))))
    }

    pub fn engine(&self) -> &ResponseEngine {
        &self.engine
    }

    /// Answer a marriage question; the category is fixed.
    pub fn generate_marriage_response(&self, request: &MarriageRequest) -> Reply<ResponseReply> {
        let rendered = self
            .engine
            .respond_marriage(&request.question, &request.style)
            .map_err(|e| self.reject("generate_marriage_response", e))?;
        ResponseReply::from_rendered(self.engine.registry(), &request.question, rendered)
            .map_err(|e| self.reject("generate_marriage_response", e))
    }

    /// Answer a question of any category.
    pub fn generate_response(&self, request: &ResponseRequest) -> Reply<ResponseReply> {
        let selector = CategorySelector::parse(&request.category);
        let mut rendered = self
            .engine
            .respond(&request.question, &request.style, &selector)
            .map_err(|e| self.reject("generate_response", e))?;

        if let Some(situation) = &request.situation {
            rendered.text = self.engine.customize(&rendered.text, situation);
        }

        let similar = if request.include_similar {
            self.engine
                .similar_questions(&rendered.category_key, &rendered.matched_question)
                .map_err(|e| self.reject("generate_response", e))?
        } else {
            Vec::new()
        };

        tracing::debug!(
            selector = %selector,
            category = %rendered.category_key,
            matched = %rendered.matched_question,
            style = %rendered.style_key,
            "Generated response"
        );

        ResponseReply::from_rendered(self.engine.registry(), &request.question, rendered)
            .map(|reply| reply.with_similar_questions(similar))
            .map_err(|e| self.reject("generate_response", e))
    }

    /// Categories, styles and example questions.
    pub fn list_categories(&self) -> CatalogReply {
        CatalogReply::from_registry(self.engine.registry())
    }

    /// Example questions per category.
    pub fn question_examples(&self) -> Vec<CategoryExamples> {
        self.list_categories().examples
    }

    /// Append situational remarks to a response text.
    pub fn customize_response(&self, request: &CustomizeRequest) -> CustomizedReply {
        let customized = self.engine.customize(&request.response, &request.situation);
        CustomizedReply::new(&request.response, customized, request.situation.clone())
    }

    /// Other questions of the category, after matching the question to its
    /// canonical form.
    pub fn similar_questions(&self, request: &SimilarRequest) -> Reply<SimilarReply> {
        let (matched, similar) = self
            .engine
            .similar_to(&request.category, &request.question)
            .map_err(|e| self.reject("get_similar_questions", e))?;
        Ok(SimilarReply::new(
            &request.category,
            &request.question,
            matched,
            similar,
        ))
    }

    fn reject(&self, operation: &str, err: HelperError) -> ErrorReply {
        if err.is_caller_error() {
            tracing::info!(operation, kind = err.kind(), "Rejected request: {}", err);
        } else {
            tracing::error!(operation, kind = err.kind(), "Request failed: {}", err);
        }
        ErrorReply::from(err)
    }
}
