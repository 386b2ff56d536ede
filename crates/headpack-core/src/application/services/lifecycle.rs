//! Lifecycle Service - the build-lifecycle orchestrator.
//!
//! Drives the remaining lifecycle operations over one
//! [`RecipeEvaluation`]:
//!
//! 1. declare-requirements
//! 2. generate-configuration (dependency resolution + toolchain variables)
//! 3. build: configure, then build + test when the `test` option is set
//! 4. package: license copy, install, prune
//! 5. publish-info
//!
//! Strictly sequential and synchronous; a fatal error in any phase halts
//! the remaining phases immediately. There is no retry, no timeout, and
//! no cancellation here — that is the invoking tool's business.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::{
    BuildSystem, DependencyBinding, DependencyResolver, PackageWorkspace,
};
use crate::application::services::RecipeEvaluation;
use crate::domain::{
    BuildConfiguration, BuildContext, DependencyRequest, PackageInfo, ProjectIdentity, RecipeSpec,
};
use crate::error::HeadpackResult;

/// Where a successful lifecycle run halted.
///
/// `Configured` is the terminal state when tests are disabled; `Tested`
/// is only reachable through `Built`, which is only reachable through
/// `Configured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleState {
    Configured,
    Built,
    Tested,
}

/// Result of the generate-configuration operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConfiguration {
    pub identity: ProjectIdentity,
    pub bindings: Vec<DependencyBinding>,
    pub configuration: BuildConfiguration,
}

/// Result of a successful build lifecycle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub state: LifecycleState,
    pub configuration: BuildConfiguration,
}

/// Receipt describing the produced package artifact set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReceipt {
    pub package_root: PathBuf,
    /// Where the license artifact landed (`licenses/<file>`).
    pub license_path: PathBuf,
    /// Generator-specific directories removed after install.
    pub pruned: Vec<PathBuf>,
}

/// Orchestrates configuration generation, the three-phase build, and
/// packaging over the driven ports.
pub struct LifecycleService {
    resolver: Box<dyn DependencyResolver>,
    build_system: Box<dyn BuildSystem>,
    workspace: Box<dyn PackageWorkspace>,
}

impl LifecycleService {
    pub fn new(
        resolver: Box<dyn DependencyResolver>,
        build_system: Box<dyn BuildSystem>,
        workspace: Box<dyn PackageWorkspace>,
    ) -> Self {
        Self {
            resolver,
            build_system,
            workspace,
        }
    }

    /// Lifecycle operation `declare-requirements`.
    ///
    /// The declared dependency set is part of the recipe spec; the
    /// orchestrator only republishes it so the invoking tool sees one
    /// surface for all lifecycle operations.
    pub fn declare_requirements(&self, spec: &RecipeSpec) -> Vec<DependencyRequest> {
        spec.dependencies.clone()
    }

    /// Lifecycle operation `generate-configuration`.
    ///
    /// Always runs dependency resolution for the context tuple, then
    /// builds the toolchain variable map. The test-enable variable is
    /// present exactly when `options.test` is set — a deterministic
    /// function of the option alone.
    #[instrument(skip_all, fields(evaluation = %evaluation.id()))]
    pub fn generate(
        &self,
        evaluation: &RecipeEvaluation,
        context: &BuildContext,
    ) -> HeadpackResult<GeneratedConfiguration> {
        let spec = evaluation.spec();
        self.validate_context(spec, context)?;

        let identity = evaluation.identity()?;
        let bindings = self.resolver.resolve(&spec.dependencies, context)?;
        debug!(bound = bindings.len(), "dependencies resolved");

        let mut configuration = BuildConfiguration::new();
        configuration.set("CMAKE_BUILD_TYPE", context.build_type.as_str());
        if let Some(std) = spec.min_cpp_standard {
            configuration.set("CMAKE_CXX_STANDARD", std.to_string());
        }
        for binding in &bindings {
            // One root variable per binding, the way generated dependency
            // config files are located by find_package.
            configuration.set(
                format!("{}_ROOT", binding.name.to_uppercase()),
                format!("deps/{}/{}", binding.name, binding.version),
            );
        }
        if evaluation.options().test {
            configuration.set(identity.test_variable(), "TRUE");
        }

        info!(
            package = %identity,
            variables = configuration.len(),
            test = evaluation.options().test,
            "configuration generated"
        );

        Ok(GeneratedConfiguration {
            identity,
            bindings,
            configuration,
        })
    }

    /// Lifecycle operation `build`: the three-phase state machine.
    ///
    /// Configure always runs. Build and Test run only when the `test`
    /// option is set, in that order, each gated on the previous phase
    /// succeeding. Failures carry the phase output and halt everything
    /// after them; a test failure does not corrupt the artifacts the
    /// build phase already produced.
    #[instrument(skip_all, fields(evaluation = %evaluation.id()))]
    pub fn build(
        &self,
        evaluation: &RecipeEvaluation,
        context: &BuildContext,
    ) -> HeadpackResult<BuildOutcome> {
        let generated = self.generate(evaluation, context)?;

        let report = self
            .build_system
            .configure(&generated.configuration, context)?;
        debug!(output = %report.output, "configure phase finished");

        if !evaluation.options().test {
            info!(package = %generated.identity, "lifecycle halted at configured (tests disabled)");
            return Ok(BuildOutcome {
                state: LifecycleState::Configured,
                configuration: generated.configuration,
            });
        }

        let report = self.build_system.build()?;
        debug!(output = %report.output, "build phase finished");

        let report = self.build_system.test()?;
        debug!(output = %report.output, "test phase finished");

        info!(package = %generated.identity, "lifecycle reached tested");
        Ok(BuildOutcome {
            state: LifecycleState::Tested,
            configuration: generated.configuration,
        })
    }

    /// Lifecycle operation `package`.
    ///
    /// Assumes a successfully configured (and, when requested, tested)
    /// build tree. Copies the license into `licenses/`, installs headers
    /// into the package layout, then prunes the build-system-specific
    /// package-config directory a header-only package must not publish.
    /// Any failure aborts packaging; partial output is left in place.
    #[instrument(skip_all, fields(evaluation = %evaluation.id(), package_root = %package_root.display()))]
    pub fn package(
        &self,
        evaluation: &RecipeEvaluation,
        source_root: &Path,
        package_root: &Path,
    ) -> HeadpackResult<PackageReceipt> {
        let spec = evaluation.spec();

        let licenses_dir = package_root.join("licenses");
        self.workspace.create_dir_all(&licenses_dir)?;

        let license_src = source_root.join(&spec.license_file);
        let license_name = spec.license_file.file_name().ok_or_else(|| {
            ApplicationError::PackagingFailure {
                reason: format!("license path has no file name: {}", spec.license_file.display()),
            }
        })?;
        let license_dst = licenses_dir.join(license_name);
        self.workspace.copy_file(&license_src, &license_dst)?;
        debug!(license = %license_dst.display(), "license copied");

        let report = self.build_system.install(package_root)?;
        debug!(output = %report.output, "install finished");

        let mut pruned = Vec::new();
        if spec.header_only {
            let cmake_dir = package_root.join("lib").join("cmake");
            if self.workspace.exists(&cmake_dir) {
                self.workspace.remove_dir_all(&cmake_dir)?;
                pruned.push(cmake_dir);
            } else {
                warn!("install produced no lib/cmake directory to prune");
            }
        }

        info!(package_root = %package_root.display(), "package produced");
        Ok(PackageReceipt {
            package_root: package_root.to_path_buf(),
            license_path: license_dst,
            pruned,
        })
    }

    /// Lifecycle operation `publish-info`.
    pub fn publish_info(&self, evaluation: &RecipeEvaluation) -> HeadpackResult<PackageInfo> {
        let identity = evaluation.identity()?;
        Ok(PackageInfo::for_identity(
            &identity,
            evaluation.spec().metadata.clone(),
        ))
    }

    /// Reject contexts that cannot satisfy the recipe's minimum C++
    /// standard, before any configuration is generated. Contexts that do
    /// not declare a standard pass; the build system will enforce it.
    fn validate_context(&self, spec: &RecipeSpec, context: &BuildContext) -> HeadpackResult<()> {
        if let (Some(required), Some(available)) = (spec.min_cpp_standard, context.cppstd) {
            if available < required {
                return Err(ApplicationError::UnsupportedStandard {
                    required,
                    available,
                }
                .into());
            }
        }
        Ok(())
    }
}

// ── tests ────────────────────────────────────────────────────────────────────
