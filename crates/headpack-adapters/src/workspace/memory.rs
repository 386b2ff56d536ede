//! In-memory package workspace for testing.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use headpack_core::application::ApplicationError;
use headpack_core::application::ports::PackageWorkspace;
use headpack_core::error::HeadpackResult;

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

/// In-memory implementation of `PackageWorkspace`.
///
/// Tracks files and directories in two plain maps. A path exists if it is
/// a file, a created directory, or an ancestor of either. Clones share
/// state so tests can seed and inspect the workspace around a service
/// call.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with content, for example a license to be copied.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), content.into());
        }
    }

    /// Seed an (empty) directory, for example a `lib/cmake` tree the
    /// install step would have produced.
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.dirs.insert(path.into());
        }
    }

    /// Read a file's content, if present.
    pub fn file_content(&self, path: &Path) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.files.get(path).cloned())
    }

    fn error(path: &Path, reason: &str) -> ApplicationError {
        ApplicationError::WorkspaceError {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

impl PackageWorkspace for MemoryWorkspace {
    fn create_dir_all(&self, path: &Path) -> HeadpackResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Self::error(path, "lock poisoned"))?;
        inner.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> HeadpackResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Self::error(src, "lock poisoned"))?;
        let content = inner
            .files
            .get(src)
            .cloned()
            .ok_or_else(|| Self::error(src, "no such file"))?;
        inner.files.insert(dst.to_path_buf(), content);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> HeadpackResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| Self::error(path, "lock poisoned"))?;
        inner.dirs.retain(|d| !d.starts_with(path));
        inner.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner
            .files
            .keys()
            .chain(inner.dirs.iter())
            .any(|p| p == path || p.starts_with(path))
    }
}
