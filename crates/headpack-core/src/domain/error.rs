// ============================================================================
// domain/error.rs - DESCRIPTOR AND IDENTITY ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (metadata resolution memoizes failures too)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Metadata Resolution Errors
    // ========================================================================
    /// A required naming/version directive field was absent from the
    /// descriptor text. Carries the field name so callers can report
    /// exactly which directive is missing.
    #[error("descriptor field '{field}' not found")]
    MetadataNotFound { field: &'static str },

    #[error("invalid semantic version '{text}': {reason}")]
    InvalidVersion { text: String, reason: String },

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    // ========================================================================
    // Recipe Validation Errors
    // ========================================================================
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),

    #[error("invalid dependency requirement '{requirement}' for '{name}'")]
    InvalidRequirement { name: String, requirement: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MetadataNotFound { field } => vec![
                format!("The descriptor has no '{}' directive field", field),
                "Expected directives:".into(),
                "  set_project_name(NAMESPACE \"ns\" BASE_NAME \"name\")".into(),
                "  set_project_semantic_version(\"1.2.3\")".into(),
            ],
            Self::InvalidVersion { text, .. } => vec![
                format!("'{}' is not a MAJOR.MINOR.PATCH triple", text),
                "Example: set_project_semantic_version(\"0.4.0\")".into(),
            ],
            Self::InvalidRequirement { name, requirement } => vec![
                format!("Dependency '{}' has requirement '{}'", name, requirement),
                "Use a caret requirement like ^1.14".into(),
            ],
            _ => vec!["Check the descriptor file for syntax errors".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MetadataNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidVersion { .. } | Self::InvalidDescriptor(_) => ErrorCategory::Validation,
            Self::InvalidRecipe(_) | Self::InvalidRequirement { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
