//! Canonical question matching.

use crate::registry::{CanonicalQuestion, TemplateRegistry};
use crate::utilities::errors::{HelperError, Result};
use crate::utilities::string_utils::collapse_whitespace;

/// Match a question to one of the category's canonical questions.
///
/// Canonical questions are tested in authoring order for containment in
/// either direction (canonical inside input, or input inside canonical) and
/// the first hit is returned. Without a hit the category's first question is
/// returned, so matching never fails for a valid category.
pub fn match_question<'r>(
    registry: &'r TemplateRegistry,
    category_key: &str,
    question: &str,
) -> Result<&'r CanonicalQuestion> {
    let questions = registry
        .questions(category_key)
        .ok_or_else(|| HelperError::InvalidCategory {
            category: category_key.to_string(),
            valid: registry.category_keys(),
        })?;

    let input = collapse_whitespace(question);
    let matched = questions
        .iter()
        .find(|canonical| input.contains(&canonical.text) || canonical.text.contains(&input));

    matched.or_else(|| questions.first()).ok_or_else(|| {
        HelperError::data_integrity(format!(
            "category '{}' has no canonical questions",
            category_key
        ))
    })
}
