//! Local filesystem package workspace.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use headpack_core::application::ApplicationError;
use headpack_core::application::ports::PackageWorkspace;
use headpack_core::error::HeadpackResult;

/// `PackageWorkspace` backed by the local filesystem via `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct LocalWorkspace;

impl LocalWorkspace {
    pub fn new() -> Self {
        Self
    }
}

fn workspace_error(path: &Path, e: io::Error) -> ApplicationError {
    ApplicationError::WorkspaceError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

impl PackageWorkspace for LocalWorkspace {
    fn create_dir_all(&self, path: &Path) -> HeadpackResult<()> {
        debug!(path = %path.display(), "creating directory");
        fs::create_dir_all(path).map_err(|e| workspace_error(path, e))?;
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> HeadpackResult<()> {
        debug!(src = %src.display(), dst = %dst.display(), "copying file");
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent).map_err(|e| workspace_error(parent, e))?;
        }
        fs::copy(src, dst).map_err(|e| workspace_error(src, e))?;
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> HeadpackResult<()> {
        debug!(path = %path.display(), "removing directory tree");
        fs::remove_dir_all(path).map_err(|e| workspace_error(path, e))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use headpack_core::error::HeadpackError;

    #[test]
    fn creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pkg/licenses");

        let ws = LocalWorkspace::new();
        ws.create_dir_all(&nested).unwrap();
        assert!(ws.exists(&nested));
    }

    #[test]
    fn copies_into_missing_destination_directory() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("LICENSE.md");
        fs::write(&src, "MIT").unwrap();
        let dst = dir.path().join("pkg/licenses/LICENSE.md");

        let ws = LocalWorkspace::new();
        ws.copy_file(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "MIT");
    }

    #[test]
    fn missing_source_is_a_workspace_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("absent");
        let dst = dir.path().join("copy");

        let ws = LocalWorkspace::new();
        let err = ws.copy_file(&src, &dst).unwrap_err();
        assert!(matches!(
            err,
            HeadpackError::Application(ApplicationError::WorkspaceError { .. })
        ));
    }

    #[test]
    fn removes_directory_tree() {
        let dir = tempfile::tempdir().unwrap();
        let tree = dir.path().join("pkg/lib/cmake");
        fs::create_dir_all(&tree).unwrap();
        fs::write(tree.join("config.cmake"), "").unwrap();

        let ws = LocalWorkspace::new();
        ws.remove_dir_all(&dir.path().join("pkg/lib/cmake")).unwrap();
        assert!(!ws.exists(&tree));
        assert!(ws.exists(&dir.path().join("pkg/lib")));
    }
}
