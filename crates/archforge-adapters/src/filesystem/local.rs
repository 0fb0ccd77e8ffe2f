//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use archforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> ForgeResult<()> {
        trace!(from = %from.display(), to = %to.display(), "rename");
        std::fs::rename(from, to).map_err(|e| map_io_error(to, e, "move staged project"))
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ForgeError {
    ApplicationError::MaterializationFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
        kind: e.kind(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use archforge_core::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reports_existence() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("a").join("b");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("x.go"), "package b\n").unwrap();

        assert!(fs.exists(&dir.join("x.go")));
        assert_eq!(
            std::fs::read_to_string(dir.join("x.go")).unwrap(),
            "package b\n"
        );
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(tmp.path()).unwrap();
        fs.create_dir_all(tmp.path()).unwrap();
    }

    #[test]
    fn directory_blocked_by_file_fails_with_path() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let blocker = tmp.path().join("internal");
        std::fs::write(&blocker, "not a directory").unwrap();

        let target = blocker.join("domain");
        let err = fs.create_dir_all(&target).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MaterializationFailed);
        assert!(err.path().is_some());
    }

    #[test]
    fn rename_moves_directory() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let from = tmp.path().join(".staging");
        let to = tmp.path().join("project_flat");
        fs.create_dir_all(&from).unwrap();
        fs.write_file(&from.join("go.mod"), "module x\n").unwrap();

        fs.rename(&from, &to).unwrap();
        assert!(!fs.exists(&from));
        assert!(fs.exists(&to.join("go.mod")));
    }
}
