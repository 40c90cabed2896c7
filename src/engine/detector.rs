//! Category detection by keyword containment.
//!
//! Categories are scanned in the registry's declared order and the first one
//! with any keyword contained in the normalized question wins. Two
//! categories can share a cue (a question about 손주 얼굴 mentions both a
//! grandchild and a face); the earlier category always takes it.

use crate::registry::{Category, TemplateRegistry};
use crate::utilities::errors::{HelperError, Result};
use crate::utilities::string_utils::{is_blank, normalize_for_matching};

/// Detect the category of a free-text question.
///
/// Falls back to the registry's default category when no keyword matches.
/// A blank question is a caller error.
pub fn detect_category<'r>(registry: &'r TemplateRegistry, question: &str) -> Result<&'r Category> {
    if is_blank(question) {
        return Err(HelperError::invalid_input(
            "질문을 입력해 주세요. 빈 질문으로는 카테고리를 감지할 수 없습니다.",
        ));
    }

    let text = normalize_for_matching(question);
    let detected = registry.entries().iter().find(|entry| {
        entry
            .keywords
            .iter()
            .map(|keyword| normalize_for_matching(keyword))
            .any(|keyword| !keyword.is_empty() && text.contains(&keyword))
    });

    Ok(match detected {
        Some(entry) => &entry.category,
        None => registry.default_category(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::builtin().unwrap()
    }

    #[test]
    fn test_detects_each_builtin_category() {
        let registry = registry();
        let cases = vec![
            ("결혼은 언제 하니?", "marriage"),
            ("요즘 소개팅은 좀 하고 있어?", "marriage"),
            ("아기 소식은 없니?", "childbirth"),
            ("취직 준비는 잘 되어 가?", "job"),
            ("이번 시험 성적은 어땠어?", "study"),
            ("살쪘네, 다이어트 좀 해라", "appearance"),
            ("너 올해 몇 살이지?", "age"),
        ];

        for (question, expected) in cases {
            let category = detect_category(&registry, question).unwrap();
            assert_eq!(category.key, expected, "question: {}", question);
        }
    }

    #[test]
    fn test_first_declared_category_wins_ties() {
        let registry = registry();
        // Mentions a grandchild (childbirth) and a face (appearance).
        let category = detect_category(&registry, "손주 얼굴은 언제 보여줄 거니?").unwrap();
        assert_eq!(category.key, "childbirth");

        // Mentions a job and age; job is declared before age.
        let category = detect_category(&registry, "나이도 있는데 취업은 언제 할래?").unwrap();
        assert_eq!(category.key, "job");
    }

    #[test]
    fn test_whitespace_and_case_are_normalized() {
        let registry = registry();
        assert_eq!(
            detect_category(&registry, "  올해   몇\t살이지? ").unwrap().key,
            "age"
        );
        assert_eq!(
            detect_category(&registry, "When is the WEDDING?").unwrap().key,
            "marriage"
        );
        assert_eq!(
            detect_category(&registry, "How   OLD are you now?").unwrap().key,
            "age"
        );
    }

    #[test]
    fn test_no_keyword_falls_back_to_default() {
        let registry = registry();
        let category = detect_category(&registry, "안녕하세요, 잘 지내셨어요?").unwrap();
        assert_eq!(category.key, "marriage");
    }

    #[test]
    fn test_interjection_is_not_a_childbirth_cue() {
        let registry = registry();
        for greeting in ["아이고 잘 지냈니?", "아이고, 오랜만이다"] {
            let category = detect_category(&registry, greeting).unwrap();
            assert_eq!(category.key, "marriage", "{greeting}");
        }
        let category = detect_category(&registry, "아이 언제 가질 거니?").unwrap();
        assert_eq!(category.key, "childbirth");
    }

    #[test]
    fn test_blank_question_is_invalid_input() {
        let registry = registry();
        for question in ["", "   ", "\n\t"] {
            let err = detect_category(&registry, question).unwrap_err();
            assert_eq!(err.kind(), "InvalidInputError");
        }
    }

    #[test]
    fn test_detection_is_deterministic() {
        let registry = registry();
        let question = "회사는 다닐 만하니? 연봉은?";
        let first = detect_category(&registry, question).unwrap().key.clone();
        for _ in 0..10 {
            assert_eq!(detect_category(&registry, question).unwrap().key, first);
        }
    }
}
