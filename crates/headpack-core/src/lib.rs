//! headpack Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the headpack
//! build-recipe controller, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          headpack-cli (CLI)             │
//! │      (Drives the lifecycle ops)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (RecipeEvaluation, LifecycleService)   │
//! │      Orchestrates the Lifecycle         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (DescriptorSource, Resolver, Build, WS) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    headpack-adapters (Infrastructure)   │
//! │  (LocalDescriptorSource, CMakeDriver)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Descriptor grammar, Identity, Recipe)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use headpack_core::{
//!     application::{LifecycleService, RecipeEvaluation},
//!     domain::{BuildContext, OptionSet, RecipeSpec},
//! };
//!
//! // 1. Start an evaluation over a descriptor source
//! let evaluation = RecipeEvaluation::new(
//!     RecipeSpec::header_only("CMakeLists.txt"),
//!     OptionSet::with_tests(),
//!     source, // impl DescriptorSource
//! )?;
//!
//! // 2. Drive the lifecycle (with injected adapters)
//! let service = LifecycleService::new(resolver, build_system, workspace);
//! let outcome = service.build(&evaluation, &BuildContext::default())?;
//! # Ok::<(), headpack_core::error::HeadpackError>(())
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LifecycleService, RecipeEvaluation,
        ports::{BuildSystem, DependencyResolver, DescriptorSource, PackageWorkspace},
    };
    pub use crate::domain::{
        BuildConfiguration, BuildContext, BuildType, DependencyRequest, DescriptorMetadata,
        OptionSet, PackageInfo, ProjectIdentity, RecipeSpec, SemanticVersion,
    };
    pub use crate::error::{HeadpackError, HeadpackResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
