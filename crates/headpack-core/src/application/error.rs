//! Application layer errors.
//!
//! These errors represent failures in lifecycle orchestration, not in the
//! descriptor grammar or identity rules. Those are `DomainError` from
//! `crate::domain`.
//!
//! Phase failures carry the failing phase's output verbatim so the
//! invoking tool sees exactly what the build system printed. Nothing is
//! retried here; transient failures are the invoking tool's problem.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during lifecycle orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The descriptor file is missing or unreadable.
    #[error("descriptor not found: {}", path.display())]
    DescriptorNotFound { path: PathBuf },

    /// Dependency resolution could not bind a requested dependency.
    #[error("dependency resolution failed: {reason}")]
    ResolutionFailure { reason: String },

    /// The build context cannot satisfy the recipe's minimum C++ standard.
    #[error("C++{required} required, but the build context provides C++{available}")]
    UnsupportedStandard { required: u32, available: u32 },

    /// The configure phase failed. Fatal: no further phase runs.
    #[error("configure phase failed")]
    ConfigurationFailure { output: String },

    /// The build phase failed. Fatal: the test phase never runs.
    #[error("build phase failed")]
    BuildFailure { output: String },

    /// The test phase failed. Fatal to the evaluation, but build
    /// artifacts produced so far are left intact.
    #[error("test phase failed")]
    TestFailure { output: String },

    /// Packaging (license copy, install, prune) failed part-way. Partial
    /// output is left in place for the invoking tool to clean.
    #[error("packaging failed: {reason}")]
    PackagingFailure { reason: String },

    /// A package workspace operation failed.
    #[error("workspace error at {}: {reason}", path.display())]
    WorkspaceError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// The failing phase's retained output, when there is one.
    pub fn phase_output(&self) -> Option<&str> {
        match self {
            Self::ConfigurationFailure { output }
            | Self::BuildFailure { output }
            | Self::TestFailure { output } => Some(output),
            _ => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DescriptorNotFound { path } => vec![
                format!("No descriptor at: {}", path.display()),
                "Check the descriptor path in your recipe or --descriptor flag".into(),
            ],
            Self::ResolutionFailure { reason } => vec![
                format!("Resolution failed: {}", reason),
                "Check the declared dependency requirements".into(),
            ],
            Self::UnsupportedStandard { required, .. } => vec![
                format!("This package requires C++{}", required),
                "Use a newer compiler or raise the context's cppstd".into(),
            ],
            Self::ConfigurationFailure { .. } => vec![
                "The build system rejected the generated configuration".into(),
                "The configure output above is shown verbatim".into(),
            ],
            Self::BuildFailure { .. } | Self::TestFailure { .. } => vec![
                "The failing phase's output above is shown verbatim".into(),
                "Fix the reported failures and re-run".into(),
            ],
            Self::PackagingFailure { .. } => vec![
                "Packaging aborted; partial output was left in place".into(),
                "Remove the package directory before retrying".into(),
            ],
            Self::WorkspaceError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DescriptorNotFound { .. } => ErrorCategory::NotFound,
            Self::UnsupportedStandard { .. } => ErrorCategory::Validation,
            Self::ResolutionFailure { .. } => ErrorCategory::Configuration,
            Self::ConfigurationFailure { .. }
            | Self::BuildFailure { .. }
            | Self::TestFailure { .. }
            | Self::PackagingFailure { .. }
            | Self::WorkspaceError { .. } => ErrorCategory::Internal,
        }
    }
}
