//! CMake process driver.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use headpack_core::application::ApplicationError;
use headpack_core::application::ports::{BuildSystem, PhaseReport};
use headpack_core::domain::{BuildConfiguration, BuildContext};
use headpack_core::error::HeadpackResult;

/// Drives `cmake` and `ctest` as child processes.
///
/// One driver instance is bound to a single source/build tree pair. Phase
/// output (stdout and stderr combined) is always captured and retained
/// verbatim inside the phase error when a command fails.
#[derive(Debug, Clone)]
pub struct CMakeDriver {
    source_dir: PathBuf,
    build_dir: PathBuf,
}

impl CMakeDriver {
    pub fn new(source_dir: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            build_dir: build_dir.into(),
        }
    }

    /// Run one command to completion, capturing output. `on_failure` wraps
    /// the combined output into the right phase error.
    fn run(
        &self,
        mut command: Command,
        on_failure: fn(String) -> ApplicationError,
    ) -> HeadpackResult<PhaseReport> {
        debug!(command = ?command, "running build phase command");
        let output = command
            .output()
            .map_err(|e| on_failure(format!("failed to spawn {:?}: {e}", command.get_program())))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(PhaseReport::new(combined))
        } else {
            Err(on_failure(combined).into())
        }
    }
}

impl BuildSystem for CMakeDriver {
    fn configure(
        &self,
        configuration: &BuildConfiguration,
        context: &BuildContext,
    ) -> HeadpackResult<PhaseReport> {
        info!(
            build_type = %context.build_type,
            build_dir = %self.build_dir.display(),
            "configuring build tree"
        );
        let mut command = Command::new("cmake");
        command
            .arg("-S")
            .arg(&self.source_dir)
            .arg("-B")
            .arg(&self.build_dir);
        for (name, value) in configuration.variables() {
            command.arg(format!("-D{name}={value}"));
        }
        self.run(command, |output| ApplicationError::ConfigurationFailure {
            output,
        })
    }

    fn build(&self) -> HeadpackResult<PhaseReport> {
        info!(build_dir = %self.build_dir.display(), "compiling targets");
        let mut command = Command::new("cmake");
        command.arg("--build").arg(&self.build_dir);
        self.run(command, |output| ApplicationError::BuildFailure { output })
    }

    fn test(&self) -> HeadpackResult<PhaseReport> {
        info!(build_dir = %self.build_dir.display(), "running test suite");
        let mut command = Command::new("ctest");
        command
            .arg("--test-dir")
            .arg(&self.build_dir)
            .arg("--progress")
            .arg("--output-on-failure");
        self.run(command, |output| ApplicationError::TestFailure { output })
    }

    fn install(&self, package_root: &Path) -> HeadpackResult<PhaseReport> {
        info!(prefix = %package_root.display(), "installing headers");
        let mut command = Command::new("cmake");
        command
            .arg("--install")
            .arg(&self.build_dir)
            .arg("--prefix")
            .arg(package_root);
        self.run(command, |output| ApplicationError::PackagingFailure {
            reason: output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use headpack_core::error::HeadpackError;

    // Uses `false` / nonexistent binaries instead of a real cmake install
    // so the tests run anywhere.

    #[test]
    fn missing_binary_maps_to_phase_error() {
        let driver = CMakeDriver::new("src", "build");
        let mut command = Command::new("headpack-test-no-such-binary");
        command.arg("--version");

        let err = driver
            .run(command, |output| ApplicationError::BuildFailure { output })
            .unwrap_err();
        match err {
            HeadpackError::Application(ApplicationError::BuildFailure { output }) => {
                assert!(output.contains("failed to spawn"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nonzero_exit_retains_output() {
        let driver = CMakeDriver::new("src", "build");
        let mut command = Command::new("sh");
        command.arg("-c").arg("echo configure step broke; exit 1");

        let err = driver
            .run(command, |output| ApplicationError::ConfigurationFailure {
                output,
            })
            .unwrap_err();
        assert_eq!(
            err.phase_output().map(str::trim),
            Some("configure step broke")
        );
    }

    #[test]
    fn successful_command_reports_output() {
        let driver = CMakeDriver::new("src", "build");
        let mut command = Command::new("sh");
        command.arg("-c").arg("echo all good");

        let report = driver
            .run(command, |output| ApplicationError::BuildFailure { output })
            .unwrap();
        assert_eq!(report.output.trim(), "all good");
    }
}
