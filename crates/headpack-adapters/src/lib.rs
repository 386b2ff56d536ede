//! Infrastructure adapters for headpack.
//!
//! This crate implements the ports defined in
//! `headpack-core::application::ports`. It contains all external
//! dependencies and I/O operations: filesystem descriptor sources, the
//! CMake process driver, dependency resolution, and package workspaces.

pub mod build_system;
pub mod descriptor_source;
pub mod resolver;
pub mod workspace;

// Re-export commonly used adapters
pub use build_system::{CMakeDriver, RecordedPhase, RecordingBuildSystem};
pub use descriptor_source::{LocalDescriptorSource, MemoryDescriptorSource};
pub use resolver::PinnedResolver;
pub use workspace::{LocalWorkspace, MemoryWorkspace};
