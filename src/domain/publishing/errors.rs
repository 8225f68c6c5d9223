//! Publishing-specific error types.

use crate::domain::foundation::{CategoryId, DomainError, ErrorCode, TutorialId, ValidationError};

/// Publishing-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishingError {
    /// Referenced category does not exist.
    CategoryNotFound(CategoryId),
    /// Referenced tutorial does not exist.
    TutorialNotFound(TutorialId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PublishingError {
    pub fn category_not_found(id: CategoryId) -> Self {
        PublishingError::CategoryNotFound(id)
    }

    pub fn tutorial_not_found(id: TutorialId) -> Self {
        PublishingError::TutorialNotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PublishingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PublishingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PublishingError::CategoryNotFound(_) => ErrorCode::CategoryNotFound,
            PublishingError::TutorialNotFound(_) => ErrorCode::TutorialNotFound,
            PublishingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PublishingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PublishingError::CategoryNotFound(id) => format!("Category not found: {}", id),
            PublishingError::TutorialNotFound(id) => format!("Tutorial not found: {}", id),
            PublishingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PublishingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PublishingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PublishingError {}

impl From<ValidationError> for PublishingError {
    fn from(err: ValidationError) -> Self {
        PublishingError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for PublishingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PublishingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PublishingError::Infrastructure(err.to_string()),
        }
    }
}
