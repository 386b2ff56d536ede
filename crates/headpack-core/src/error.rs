//! Unified error handling for headpack core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for headpack core operations.
///
/// Cloneable on purpose: metadata resolution memoizes its first result,
/// successful or not, and hands out copies afterwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeadpackError {
    /// Errors from the domain layer (descriptor grammar, identity rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (lifecycle orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl HeadpackError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The failing build phase's retained output, when there is one.
    pub fn phase_output(&self) -> Option<&str> {
        match self {
            Self::Application(e) => e.phase_output(),
            Self::Domain(_) => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type HeadpackResult<T> = Result<T, HeadpackError>;
