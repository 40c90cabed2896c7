//! Situational customization of rendered responses.
//!
//! Customization only ever appends. Each supplied fact adds one remark line,
//! always in the order age, occupation, married, so splitting the facts
//! across successive calls in that order gives the same text as one call.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Optional personal facts supplied with one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSituation {
    /// Age in years; zero is rejected at deserialization.
    #[serde(default)]
    pub age: Option<NonZeroU32>,
    /// Free-text occupation, quoted verbatim.
    #[serde(default, alias = "job")]
    pub occupation: Option<String>,
    /// Only `Some(true)` produces a remark.
    #[serde(default)]
    pub is_married: Option<bool>,
}

impl UserSituation {
    pub fn with_age(mut self, age: NonZeroU32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    pub fn with_married(mut self, is_married: bool) -> Self {
        self.is_married = Some(is_married);
        self
    }

    /// True when no field would add a remark.
    pub fn is_empty(&self) -> bool {
        self.remarks().is_empty()
    }

    /// Remarks for the supplied fields, in age, occupation, married order.
    pub fn remarks(&self) -> Vec<String> {
        let mut remarks = Vec::new();
        if let Some(age) = self.age {
            remarks.push(age_remark(age));
        }
        if let Some(occupation) = self.occupation.as_deref() {
            remarks.push(occupation_remark(occupation));
        }
        if self.is_married == Some(true) {
            remarks.push(MARRIED_REMARK.to_string());
        }
        remarks
    }
}

const MARRIED_REMARK: &str = "(그리고 저 이미 결혼했어요. 다음 질문이 2세 계획이라면 미리 사양할게요!)";

fn age_remark(age: NonZeroU32) -> String {
    format!("(참고로 저 올해 {}살이에요. 제 나이는 제가 제일 잘 알아요!)", age)
}

fn occupation_remark(occupation: &str) -> String {
    format!(
        "(지금 '{}'(으)로서 제 몫은 충분히 하고 있으니 걱정 마세요.)",
        occupation
    )
}

/// Append the situation's remarks to a rendered response.
///
/// Returns `text` unchanged when the situation supplies nothing renderable.
pub fn customize(text: &str, situation: &UserSituation) -> String {
    let remarks = situation.remarks();
    if remarks.is_empty() {
        return text.to_string();
    }

    let mut customized = text.to_string();
    for remark in remarks {
        customized.push('\n');
        customized.push_str(&remark);
    }
    customized
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "결혼은 준비 중입니다.";

    fn age(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_empty_situation_is_identity() {
        assert_eq!(customize(BASE, &UserSituation::default()), BASE);
    }

    #[test]
    fn test_unmarried_is_treated_as_absent() {
        let situation = UserSituation::default().with_married(false);
        assert!(situation.is_empty());
        assert_eq!(customize(BASE, &situation), BASE);
    }

    #[test]
    fn test_each_field_adds_its_remark() {
        let out = customize(BASE, &UserSituation::default().with_age(age(25)));
        assert!(out.starts_with(BASE));
        assert!(out.contains("25살"));

        let out = customize(BASE, &UserSituation::default().with_occupation("대학원생"));
        assert!(out.contains("'대학원생'"));

        let out = customize(BASE, &UserSituation::default().with_married(true));
        assert!(out.contains("이미 결혼했어요"));
    }

    #[test]
    fn test_fields_are_appended_in_fixed_order() {
        let situation = UserSituation::default()
            .with_married(true)
            .with_occupation("student")
            .with_age(age(25));
        let out = customize(BASE, &situation);

        let age_at = out.find("25살").unwrap();
        let occupation_at = out.find("'student'").unwrap();
        let married_at = out.find("이미 결혼했어요").unwrap();
        assert!(age_at < occupation_at);
        assert!(occupation_at < married_at);
    }

    #[test]
    fn test_successive_calls_compose() {
        let stepwise = customize(
            &customize(BASE, &UserSituation::default().with_age(age(25))),
            &UserSituation::default().with_occupation("student"),
        );
        let combined = customize(
            BASE,
            &UserSituation::default()
                .with_age(age(25))
                .with_occupation("student"),
        );
        assert_eq!(stepwise, combined);
        assert!(combined.find("25살").unwrap() < combined.find("'student'").unwrap());
    }

    #[test]
    fn test_customize_is_pure() {
        let situation = UserSituation::default().with_age(age(31));
        assert_eq!(customize(BASE, &situation), customize(BASE, &situation));
    }

    #[test]
    fn test_deserialize_accepts_job_alias_and_rejects_zero_age() {
        let situation: UserSituation =
            serde_json::from_str(r#"{ "age": 25, "job": "학생" }"#).unwrap();
        assert_eq!(situation.age, Some(age(25)));
        assert_eq!(situation.occupation.as_deref(), Some("학생"));
        assert_eq!(situation.is_married, None);

        assert!(serde_json::from_str::<UserSituation>(r#"{ "age": 0 }"#).is_err());
    }
}
