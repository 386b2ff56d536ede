//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what one recipe evaluation needs from external
//! systems. The `headpack-adapters` crate provides implementations.

use std::path::Path;

use serde::Serialize;

use crate::domain::{BuildConfiguration, BuildContext, DependencyRequest, SemanticVersion};
use crate::error::HeadpackResult;

/// Port for reading descriptor text.
///
/// Implemented by:
/// - `headpack_adapters::descriptor_source::LocalDescriptorSource` (production)
/// - `headpack_adapters::descriptor_source::MemoryDescriptorSource` (testing)
///
/// ## Design Notes
///
/// Scoped acquisition: implementations open, read fully, and close on
/// every exit path. Callers load at most once per evaluation; the
/// memoization itself lives in `RecipeEvaluation`, not here.
pub trait DescriptorSource: Send + Sync {
    /// Read the descriptor's full text.
    ///
    /// Fails with `ApplicationError::DescriptorNotFound` if the file is
    /// missing or unreadable.
    fn load(&self, path: &Path) -> HeadpackResult<String>;
}

/// A dependency request bound to a concrete version for one build
/// context tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyBinding {
    pub name: String,
    pub version: SemanticVersion,
}

/// Port for locating/binding required dependencies.
///
/// Implemented by:
/// - `headpack_adapters::resolver::PinnedResolver` (fixed version table)
pub trait DependencyResolver: Send + Sync {
    /// Bind every request to a concrete version for the given platform /
    /// compiler / architecture tuple. Always run, regardless of options.
    fn resolve(
        &self,
        requests: &[DependencyRequest],
        context: &BuildContext,
    ) -> HeadpackResult<Vec<DependencyBinding>>;
}

/// Output retained from one build-system phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseReport {
    pub output: String,
}

impl PhaseReport {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

/// Port for the underlying build system (configure / build / test /
/// install mechanics are out of scope and live behind this trait).
///
/// Implemented by:
/// - `headpack_adapters::build_system::CMakeDriver` (production)
/// - `headpack_adapters::build_system::RecordingBuildSystem` (testing)
///
/// Phase failures map to `ConfigurationFailure` / `BuildFailure` /
/// `TestFailure` with the phase output retained verbatim.
pub trait BuildSystem: Send + Sync {
    /// Configure the build tree from the generated configuration.
    fn configure(
        &self,
        configuration: &BuildConfiguration,
        context: &BuildContext,
    ) -> HeadpackResult<PhaseReport>;

    /// Compile all targets, including tests.
    fn build(&self) -> HeadpackResult<PhaseReport>;

    /// Run the test suite with progress reporting; full output is
    /// retained on failure.
    fn test(&self) -> HeadpackResult<PhaseReport>;

    /// Install build artifacts (headers) into the package layout.
    fn install(&self, package_root: &Path) -> HeadpackResult<PhaseReport>;
}

/// Port for package-layout filesystem operations.
///
/// Implemented by:
/// - `headpack_adapters::workspace::LocalWorkspace` (production)
/// - `headpack_adapters::workspace::MemoryWorkspace` (testing)
pub trait PackageWorkspace: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HeadpackResult<()>;

    /// Copy a single file, overwriting any existing destination.
    fn copy_file(&self, src: &Path, dst: &Path) -> HeadpackResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> HeadpackResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
