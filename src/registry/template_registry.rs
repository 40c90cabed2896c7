//! The validated, read-only template registry.

use std::collections::HashSet;
use std::path::Path;

use super::types::{CanonicalQuestion, Category, CategoryEntry, RegistryDocument, Style};
use crate::translations::RESPONSES_JSON;
use crate::utilities::errors::{HelperError, Result};

/// Categories, styles and canonical questions, validated at construction.
///
/// A `TemplateRegistry` can only be obtained through one of the loading
/// constructors, all of which run the completeness checks. Holding one is
/// therefore proof that every canonical question has a template for every
/// style and that every category has at least one question.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    default_category: String,
    styles: Vec<Style>,
    categories: Vec<CategoryEntry>,
}

impl TemplateRegistry {
    /// Load the response data embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(RESPONSES_JSON)
    }

    /// Load from a file when a path is given, otherwise use the embedded data.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Load a registry data file. `.yaml`/`.yml` files are parsed as YAML,
    /// anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        log::debug!("Loading response data from {}", display);

        let content = std::fs::read_to_string(path).map_err(|e| HelperError::RegistryLoad {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let is_yaml = path
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml");
        let document: RegistryDocument = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| HelperError::RegistryLoad {
                path: display.clone(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| HelperError::RegistryLoad {
                path: display.clone(),
                message: e.to_string(),
            })?
        };

        Self::from_document(document)
    }

    /// Parse registry data from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: RegistryDocument =
            serde_json::from_str(json).map_err(|e| HelperError::RegistryLoad {
                path: "<json>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_document(document)
    }

    /// Parse registry data from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: RegistryDocument =
            serde_yaml::from_str(yaml).map_err(|e| HelperError::RegistryLoad {
                path: "<yaml>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_document(document)
    }

    /// Validate a parsed document and build the registry from it.
    ///
    /// Fails with [`HelperError::DataIntegrity`] when:
    /// - there are no styles or no categories,
    /// - a style key, category key, or question text (within a category) repeats,
    /// - a category has no canonical questions,
    /// - a question lacks a non-empty template for some style, or has a
    ///   template for a style that does not exist,
    /// - the default category is not one of the categories.
    pub fn from_document(document: RegistryDocument) -> Result<Self> {
        if document.styles.is_empty() {
            return Err(HelperError::data_integrity("no styles defined"));
        }
        if document.categories.is_empty() {
            return Err(HelperError::data_integrity("no categories defined"));
        }

        let mut style_keys = HashSet::new();
        for style in &document.styles {
            if !style_keys.insert(style.key.as_str()) {
                return Err(HelperError::data_integrity(format!(
                    "duplicate style key '{}'",
                    style.key
                )));
            }
        }

        let mut category_keys = HashSet::new();
        for entry in &document.categories {
            let key = entry.category.key.as_str();
            if !category_keys.insert(key) {
                return Err(HelperError::data_integrity(format!(
                    "duplicate category key '{}'",
                    key
                )));
            }
            if entry.questions.is_empty() {
                return Err(HelperError::data_integrity(format!(
                    "category '{}' has no canonical questions",
                    key
                )));
            }

            let mut texts = HashSet::new();
            for question in &entry.questions {
                if !texts.insert(question.text.as_str()) {
                    return Err(HelperError::data_integrity(format!(
                        "category '{}' lists question '{}' twice",
                        key, question.text
                    )));
                }
                for style in &document.styles {
                    let has_text = question
                        .template(&style.key)
                        .map_or(false, |text| !text.trim().is_empty());
                    if !has_text {
                        return Err(HelperError::data_integrity(format!(
                            "question '{}' in category '{}' has no template for style '{}'",
                            question.text, key, style.key
                        )));
                    }
                }
                if let Some(unknown) = question
                    .templates
                    .keys()
                    .find(|style| !style_keys.contains(style.as_str()))
                {
                    return Err(HelperError::data_integrity(format!(
                        "question '{}' in category '{}' has a template for unknown style '{}'",
                        question.text, key, unknown
                    )));
                }
            }
        }

        if !category_keys.contains(document.default_category.as_str()) {
            return Err(HelperError::data_integrity(format!(
                "default category '{}' is not defined",
                document.default_category
            )));
        }

        let registry = Self {
            default_category: document.default_category,
            styles: document.styles,
            categories: document.categories,
        };
        log::info!(
            "Template registry ready: {} categories, {} styles, {} canonical questions",
            registry.categories.len(),
            registry.styles.len(),
            registry.question_count()
        );
        Ok(registry)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Categories in declared (detection) order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().map(|entry| &entry.category)
    }

    /// Category entries, including keywords and questions, in declared order.
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.categories
    }

    /// Styles in declared order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.entry(key).map(|entry| &entry.category)
    }

    pub fn style(&self, key: &str) -> Option<&Style> {
        self.styles.iter().find(|style| style.key == key)
    }

    /// The category detection falls back to.
    pub fn default_category(&self) -> &Category {
        // Presence is checked in `from_document`.
        self.category(&self.default_category)
            .unwrap_or(&self.categories[0].category)
    }

    pub fn category_keys(&self) -> Vec<String> {
        self.categories().map(|c| c.key.clone()).collect()
    }

    pub fn style_keys(&self) -> Vec<String> {
        self.styles.iter().map(|s| s.key.clone()).collect()
    }

    /// Canonical questions of a category in authoring order.
    pub fn questions(&self, category_key: &str) -> Option<&[CanonicalQuestion]> {
        self.entry(category_key).map(|entry| entry.questions.as_slice())
    }

    /// Detection keywords of a category in declared order.
    pub fn keywords(&self, category_key: &str) -> Option<&[String]> {
        self.entry(category_key).map(|entry| entry.keywords.as_slice())
    }

    /// Verbatim template text for a (category, question, style) combination.
    pub fn template(&self, category_key: &str, question: &str, style_key: &str) -> Result<&str> {
        self.entry(category_key)
            .and_then(|entry| entry.questions.iter().find(|q| q.text == question))
            .and_then(|q| q.template(style_key))
            .ok_or_else(|| HelperError::NotFound {
                category: category_key.to_string(),
                question: question.to_string(),
                style: style_key.to_string(),
            })
    }

    /// Example question texts per category, in declared order.
    pub fn question_examples(&self) -> Vec<(&str, Vec<&str>)> {
        self.categories
            .iter()
            .map(|entry| {
                (
                    entry.category.key.as_str(),
                    entry.questions.iter().map(|q| q.text.as_str()).collect(),
                )
            })
            .collect()
    }

    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|entry| entry.questions.len()).sum()
    }

    fn entry(&self, key: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|entry| entry.category.key == key)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
