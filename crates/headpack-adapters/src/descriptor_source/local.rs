//! Local filesystem descriptor source.

use std::fs;
use std::path::Path;

use tracing::debug;

use headpack_core::application::ApplicationError;
use headpack_core::application::ports::DescriptorSource;
use headpack_core::error::HeadpackResult;

/// Reads descriptor text from the local filesystem.
///
/// Scoped acquisition: the file is opened, read fully, and closed on every
/// exit path. Any I/O failure, missing file included, surfaces as
/// `DescriptorNotFound` so callers get one consistent error shape.
#[derive(Debug, Clone, Default)]
pub struct LocalDescriptorSource;

impl LocalDescriptorSource {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorSource for LocalDescriptorSource {
    fn load(&self, path: &Path) -> HeadpackResult<String> {
        debug!(path = %path.display(), "loading descriptor");
        fs::read_to_string(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "descriptor read failed");
            ApplicationError::DescriptorNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use headpack_core::error::HeadpackError;

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMakeLists.txt");
        fs::write(&path, "set_project_name(NAMESPACE arba BASE_NAME vrsn)").unwrap();

        let source = LocalDescriptorSource::new();
        let text = source.load(&path).unwrap();
        assert!(text.contains("BASE_NAME vrsn"));
    }

    #[test]
    fn missing_file_is_descriptor_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let source = LocalDescriptorSource::new();
        let err = source.load(&path).unwrap_err();
        match err {
            HeadpackError::Application(ApplicationError::DescriptorNotFound { path: p }) => {
                assert!(p.ends_with("absent.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
