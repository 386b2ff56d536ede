//! Descriptor source adapters.
//!
//! Implementations of the `DescriptorSource` port: a local filesystem
//! reader for production use and an in-memory store for tests.

mod local;
mod memory;

pub use local::LocalDescriptorSource;
pub use memory::MemoryDescriptorSource;
