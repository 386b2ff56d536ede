//! Package workspace adapters.
//!
//! Implementations of the `PackageWorkspace` port: a local filesystem
//! workspace for production and an in-memory workspace for tests.

mod local;
mod memory;

pub use local::LocalWorkspace;
pub use memory::MemoryWorkspace;
