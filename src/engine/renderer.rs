//! Style-keyed template rendering.

use serde::{Deserialize, Serialize};

use crate::registry::{Style, TemplateRegistry};
use crate::utilities::errors::{HelperError, Result};

/// A rendered template, before any customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedResponse {
    pub matched_question: String,
    pub category_key: String,
    pub style_key: String,
    pub text: String,
}

/// Check a style key against the registry, returning its record.
///
/// Callers run this before any detection or matching work so that an
/// unknown style is reported even when nothing else about the request is
/// valid.
pub fn validate_style<'r>(registry: &'r TemplateRegistry, style_key: &str) -> Result<&'r Style> {
    registry
        .style(style_key)
        .ok_or_else(|| HelperError::InvalidStyle {
            style: style_key.to_string(),
            valid: registry.style_keys(),
        })
}

/// Render the verbatim template for (category, question, style).
pub fn render(
    registry: &TemplateRegistry,
    category_key: &str,
    matched_question: &str,
    style_key: &str,
) -> Result<RenderedResponse> {
    validate_style(registry, style_key)?;
    let text = registry.template(category_key, matched_question, style_key)?;

    Ok(RenderedResponse {
        matched_question: matched_question.to_string(),
        category_key: category_key.to_string(),
        style_key: style_key.to_string(),
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::builtin().unwrap()
    }

    #[test]
    fn test_every_known_style_renders_text() {
        let registry = registry();
        for (category, questions) in registry.question_examples() {
            for question in questions {
                for style in registry.style_keys() {
                    let rendered = render(&registry, category, question, &style).unwrap();
                    assert!(!rendered.text.is_empty());
                    assert_eq!(rendered.style_key, style);
                    assert_eq!(rendered.matched_question, question);
                }
            }
        }
    }

    #[test]
    fn test_render_returns_template_verbatim() {
        let registry = registry();
        let rendered = render(&registry, "marriage", "결혼은 언제 하니?", "humorous").unwrap();
        assert_eq!(
            rendered.text,
            registry
                .template("marriage", "결혼은 언제 하니?", "humorous")
                .unwrap()
        );
    }

    #[test]
    fn test_unknown_style_lists_all_valid_styles() {
        let registry = registry();
        // Style is checked before the category and question, which are also bogus here.
        let err = render(&registry, "weather", "비 오니?", "nonexistent_style").unwrap_err();
        match &err {
            HelperError::InvalidStyle { style, valid } => {
                assert_eq!(style, "nonexistent_style");
                assert_eq!(valid.len(), 5);
            }
            other => panic!("expected InvalidStyle, got {:?}", other),
        }
        let msg = err.to_string();
        for key in ["humorous", "witty", "polite", "reverse", "wise"] {
            assert!(msg.contains(key), "missing {} in {}", key, msg);
        }
    }

    #[test]
    fn test_unknown_question_is_not_found() {
        let registry = registry();
        let err = render(&registry, "marriage", "없는 질문", "polite").unwrap_err();
        assert_eq!(err.kind(), "NotFoundError");
    }
}
