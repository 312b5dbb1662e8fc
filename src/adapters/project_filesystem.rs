use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-based project store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a project store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path(path).exists()
    }

    fn ensure_dir(&self, path: &str) -> Result<bool, AppError> {
        let full_path = self.resolve_path(path);
        if full_path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&full_path)?;
        Ok(true)
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)?;
        Ok(())
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let full_path = self.resolve_path(path);
            let mut perms = fs::metadata(&full_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }
}
