//! Application services - orchestrate the lifecycle operations.
//!
//! `RecipeEvaluation` owns descriptor loading and metadata resolution;
//! `LifecycleService` drives configuration generation, the build phases,
//! packaging, and info publication over the driven ports.

pub mod evaluation;
pub mod lifecycle;

pub use evaluation::RecipeEvaluation;
pub use lifecycle::{
    BuildOutcome, GeneratedConfiguration, LifecycleService, LifecycleState, PackageReceipt,
};
