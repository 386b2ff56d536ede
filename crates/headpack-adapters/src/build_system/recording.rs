//! Recording build system for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use headpack_core::application::ApplicationError;
use headpack_core::application::ports::{BuildSystem, PhaseReport};
use headpack_core::domain::{BuildConfiguration, BuildContext};
use headpack_core::error::HeadpackResult;

/// One build phase, as recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedPhase {
    Configure,
    Build,
    Test,
    Install,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<RecordedPhase>,
    configurations: Vec<BuildConfiguration>,
    install_prefixes: Vec<PathBuf>,
    fail_on: Option<(RecordedPhase, String)>,
}

/// Test double implementing `BuildSystem`.
///
/// Records every phase call in order. Clones share state, so a test keeps
/// one handle for assertions after moving another into the service. A
/// single phase can be scripted to fail with a given output.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuildSystem {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingBuildSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `phase` to fail with `output` as the retained phase output.
    pub fn fail_on(&self, phase: RecordedPhase, output: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_on = Some((phase, output.into()));
        }
    }

    /// Phases invoked so far, in call order.
    pub fn calls(&self) -> Vec<RecordedPhase> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }

    /// Configurations passed to `configure`, in call order.
    pub fn configurations(&self) -> Vec<BuildConfiguration> {
        self.inner
            .lock()
            .map(|inner| inner.configurations.clone())
            .unwrap_or_default()
    }

    /// Package roots passed to `install`, in call order.
    pub fn install_prefixes(&self) -> Vec<PathBuf> {
        self.inner
            .lock()
            .map(|inner| inner.install_prefixes.clone())
            .unwrap_or_default()
    }

    fn record(&self, phase: RecordedPhase) -> HeadpackResult<PhaseReport> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::BuildFailure {
                output: "recording lock poisoned".into(),
            })?;
        inner.calls.push(phase);
        if let Some((fail_phase, output)) = &inner.fail_on {
            if *fail_phase == phase {
                let output = output.clone();
                return Err(phase_error(phase, output).into());
            }
        }
        Ok(PhaseReport::default())
    }
}

fn phase_error(phase: RecordedPhase, output: String) -> ApplicationError {
    match phase {
        RecordedPhase::Configure => ApplicationError::ConfigurationFailure { output },
        RecordedPhase::Build => ApplicationError::BuildFailure { output },
        RecordedPhase::Test => ApplicationError::TestFailure { output },
        RecordedPhase::Install => ApplicationError::PackagingFailure { reason: output },
    }
}

impl BuildSystem for RecordingBuildSystem {
    fn configure(
        &self,
        configuration: &BuildConfiguration,
        _context: &BuildContext,
    ) -> HeadpackResult<PhaseReport> {
        if let Ok(mut inner) = self.inner.lock() {
            inner.configurations.push(configuration.clone());
        }
        self.record(RecordedPhase::Configure)
    }

    fn build(&self) -> HeadpackResult<PhaseReport> {
        self.record(RecordedPhase::Build)
    }

    fn test(&self) -> HeadpackResult<PhaseReport> {
        self.record(RecordedPhase::Test)
    }

    fn install(&self, package_root: &Path) -> HeadpackResult<PhaseReport> {
        if let Ok(mut inner) = self.inner.lock() {
            inner.install_prefixes.push(package_root.to_path_buf());
        }
        self.record(RecordedPhase::Install)
    }
}
