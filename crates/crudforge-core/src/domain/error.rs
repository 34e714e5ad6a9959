// ============================================================================
// domain/error.rs - GENERATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (plans are rebuilt, errors are compared in tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("field '{field}' has unsupported type '{type_name}'")]
    UnsupportedType { field: String, type_name: String },

    #[error("duplicate field name: {name}")]
    DuplicateFieldName { name: String },

    // ========================================================================
    // Plan invariants (generator bugs, never user input)
    // ========================================================================
    #[error("two artifacts share the path {path}")]
    PathCollision { path: String },

    #[error("{path} is not inside a declared directory")]
    UndeclaredDirectory { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("project plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Shorthand used by the identifier checks.
    pub(crate) fn invalid_identifier(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { value, .. } => vec![
                format!("'{value}' cannot be used as a type or variable name"),
                "Use letters, digits and underscores only".into(),
                "Start with a letter or underscore, e.g. Product, order_item".into(),
            ],
            Self::UnsupportedType { type_name, .. } => vec![
                format!("'{type_name}' is not a known field type"),
                "Supported types: string, number, boolean, date, id".into(),
                "Try: crudforge types".into(),
            ],
            Self::DuplicateFieldName { name } => vec![
                format!("Field '{name}' is declared more than once"),
                "Field names must be unique, including the identity field".into(),
            ],
            Self::PathCollision { .. }
            | Self::UndeclaredDirectory { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyPlan => vec![
                "This is a bug in crudforge's generator".into(),
                "Please report it together with the entity schema you used".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. }
            | Self::UnsupportedType { .. }
            | Self::DuplicateFieldName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_invariant_errors_are_reported_as_generator_bugs() {
        let errors = [
            DomainError::PathCollision { path: "src/a.ts".into() },
            DomainError::UndeclaredDirectory { path: "lib/a.ts".into() },
            DomainError::AbsolutePathNotAllowed { path: "/etc/passwd".into() },
            DomainError::EmptyPlan,
        ];
        for err in errors {
            assert_eq!(err.category(), ErrorCategory::Internal, "{err}");
            assert!(err.suggestions()[0].contains("bug"), "{err}");
        }
    }

    #[test]
    fn input_errors_are_validation() {
        let err = DomainError::invalid_identifier("1x", "name cannot start with a digit");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("letters, digits")));
    }
}
