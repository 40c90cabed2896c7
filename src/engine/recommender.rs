//! Similar-question lookup.

use crate::registry::TemplateRegistry;
use crate::utilities::errors::{HelperError, Result};

/// Other canonical questions of the category, in authoring order, with the
/// matched question left out.
pub fn similar_questions(
    registry: &TemplateRegistry,
    category_key: &str,
    matched_question: &str,
) -> Result<Vec<String>> {
    let questions = registry
        .questions(category_key)
        .ok_or_else(|| HelperError::InvalidCategory {
            category: category_key.to_string(),
            valid: registry.category_keys(),
        })?;

    Ok(questions
        .iter()
        .filter(|q| q.text != matched_question)
        .map(|q| q.text.clone())
        .collect())
}
