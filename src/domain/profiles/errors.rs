//! Profile-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Profile-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProfileError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProfileError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProfileError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProfileError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProfileError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProfileError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProfileError {}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ProfileError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ProfileError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_keeps_field_name() {
        let err: ProfileError = ValidationError::empty_field("city").into();
        assert!(matches!(err, ProfileError::ValidationFailed { ref field, .. } if field == "city"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err: ProfileError = DomainError::database("connection refused").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(err.message().contains("connection refused"));
    }
}
