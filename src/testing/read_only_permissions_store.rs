use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::project_filesystem::FilesystemProjectStore;
use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem store whose permission changes always fail.
pub struct ReadOnlyPermissionsStore {
    inner: FilesystemProjectStore,
}

impl ReadOnlyPermissionsStore {
    pub fn new(root: PathBuf) -> Self {
        Self { inner: FilesystemProjectStore::new(root) }
    }
}

impl ProjectStore for ReadOnlyPermissionsStore {
    fn root(&self) -> &Path {
        self.inner.root()
    }

    fn exists(&self, path: &str) -> bool {
        self.inner.exists(path)
    }

    fn ensure_dir(&self, path: &str) -> Result<bool, AppError> {
        self.inner.ensure_dir(path)
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        self.inner.write_file(path, content)
    }

    fn set_executable(&self, _path: &str) -> Result<(), AppError> {
        Err(AppError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "chmod not permitted")))
    }
}
