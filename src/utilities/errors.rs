//! Error types for the holiday helper.
//!
//! Every failure the core can produce is a deterministic validation or
//! integrity failure. None of them are transient, so none are retried.

use thiserror::Error;

/// Errors produced by the registry, the response engine and the envelope layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    /// Blank question text on an operation that needs detection, or malformed arguments.
    #[error("{message}")]
    InvalidInput { message: String },

    /// Style key not in the known style set.
    #[error("지원하지 않는 스타일입니다: '{style}'. 사용 가능: {}", .valid.join(", "))]
    InvalidStyle { style: String, valid: Vec<String> },

    /// Explicitly supplied category key not in the known category set.
    #[error("지원하지 않는 카테고리입니다: '{category}'. 사용 가능: {}", .valid.join(", "))]
    InvalidCategory { category: String, valid: Vec<String> },

    /// Requested (category, question, style) combination is absent.
    #[error("템플릿을 찾을 수 없습니다: category='{category}', question='{question}', style='{style}'")]
    NotFound {
        category: String,
        question: String,
        style: String,
    },

    /// The registry data violates its completeness invariant.
    #[error("데이터 무결성 오류: {message}")]
    DataIntegrity { message: String },

    /// A registry data file could not be read or parsed.
    #[error("응답 데이터를 불러올 수 없습니다 ({path}): {message}")]
    RegistryLoad { path: String, message: String },
}

impl HelperError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity {
            message: message.into(),
        }
    }

    /// Stable, machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "InvalidInputError",
            Self::InvalidStyle { .. } => "InvalidStyleError",
            Self::InvalidCategory { .. } => "InvalidCategoryError",
            Self::NotFound { .. } => "NotFoundError",
            Self::DataIntegrity { .. } => "DataIntegrityError",
            Self::RegistryLoad { .. } => "RegistryLoadError",
        }
    }

    /// Short user-facing label shown in error replies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } | Self::InvalidStyle { .. } | Self::InvalidCategory { .. } => {
                "입력 오류"
            }
            Self::NotFound { .. } => "답변 생성 실패",
            Self::DataIntegrity { .. } | Self::RegistryLoad { .. } => "데이터 오류",
        }
    }

    /// Whether the caller, rather than the data, is at fault.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::InvalidStyle { .. } | Self::InvalidCategory { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HelperError>;
