//! Application layer for headpack.
//!
//! This layer contains:
//! - **Services**: lifecycle orchestration (RecipeEvaluation, LifecycleService)
//! - **Ports**: interface definitions (traits) for external collaborators
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! grammar or identity logic itself. All of that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BuildOutcome, GeneratedConfiguration, LifecycleService, LifecycleState, PackageReceipt,
    RecipeEvaluation,
};

// Re-export port traits (for adapter implementation)
pub use ports::{BuildSystem, DependencyResolver, DescriptorSource, PackageWorkspace};

pub use error::ApplicationError;
