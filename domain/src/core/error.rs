//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These only occur while the registry is being assembled. Invocation-time
/// failures are never errors; they are returned as
/// [`InvocationResult::Fail`](crate::tool::value_objects::InvocationResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid model metadata for '{model}': {reason}")]
    InvalidModel { model: String, reason: String },

    #[error("Tool name '{0}' is already registered")]
    DuplicateToolName(String),
}

impl DomainError {
    pub fn invalid_model(model: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidModel {
            model: model.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model_display() {
        let error = DomainError::invalid_model("Payment", "duplicate field 'account'");
        assert_eq!(
            error.to_string(),
            "Invalid model metadata for 'Payment': duplicate field 'account'"
        );
    }

    #[test]
    fn test_duplicate_tool_name_display() {
        let error = DomainError::DuplicateToolName("create_a_b".to_string());
        assert_eq!(error.to_string(), "Tool name 'create_a_b' is already registered");
    }
}
