//! In-memory descriptor source for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use headpack_core::application::ApplicationError;
use headpack_core::application::ports::DescriptorSource;
use headpack_core::error::HeadpackResult;

/// In-memory implementation of `DescriptorSource`.
///
/// Cloning shares the underlying store, so a test can hold a handle and
/// rewrite descriptor content after handing the source to an evaluation.
#[derive(Debug, Clone, Default)]
pub struct MemoryDescriptorSource {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryDescriptorSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace descriptor content at `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
    }

    /// Remove the descriptor at `path`, making later loads fail.
    pub fn remove(&self, path: &Path) {
        if let Ok(mut files) = self.files.write() {
            files.remove(path);
        }
    }
}

impl DescriptorSource for MemoryDescriptorSource {
    fn load(&self, path: &Path) -> HeadpackResult<String> {
        let not_found = || ApplicationError::DescriptorNotFound {
            path: path.to_path_buf(),
        };
        let files = self.files.read().map_err(|_| not_found())?;
        files.get(path).cloned().ok_or_else(|| not_found().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use headpack_core::error::HeadpackError;

    #[test]
    fn stores_and_loads_content() {
        let source = MemoryDescriptorSource::new();
        source.insert("CMakeLists.txt", "set_project_semantic_version(\"1.2.3\")");

        let text = source.load(Path::new("CMakeLists.txt")).unwrap();
        assert!(text.contains("1.2.3"));
    }

    #[test]
    fn clones_share_the_store() {
        let source = MemoryDescriptorSource::new();
        let handle = source.clone();
        handle.insert("CMakeLists.txt", "content");

        assert!(source.load(Path::new("CMakeLists.txt")).is_ok());
    }

    #[test]
    fn missing_entry_is_descriptor_not_found() {
        let source = MemoryDescriptorSource::new();
        let err = source.load(Path::new("nope.txt")).unwrap_err();
        assert!(matches!(
            err,
            HeadpackError::Application(ApplicationError::DescriptorNotFound { .. })
        ));
    }
}
