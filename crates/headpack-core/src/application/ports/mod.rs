//! Application ports (traits) for external collaborators.
//!
//! Ports define what the lifecycle needs from the outside world; the
//! `headpack-adapters` crate implements them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure
//!   - `DescriptorSource`: reads descriptor text
//!   - `DependencyResolver`: binds dependency requests to versions
//!   - `BuildSystem`: configure / build / test / install phases
//!   - `PackageWorkspace`: package-layout filesystem operations
//!
//! - **Driving (Input) Ports**: the lifecycle operations themselves,
//!   exposed by the services and driven from the CLI layer.

pub mod output;

pub use output::{
    BuildSystem, DependencyBinding, DependencyResolver, DescriptorSource, PackageWorkspace,
    PhaseReport,
};
