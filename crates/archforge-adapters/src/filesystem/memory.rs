//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use archforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other. Paths registered with [`deny`](Self::deny) fail
/// with `PermissionDenied`.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every later write to `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.denied.clear();
        }
    }

    fn read(&self) -> ForgeResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> ForgeResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(failure(&current, io::ErrorKind::NotADirectory, "is a file"));
            }
            if inner.denied.contains(&current) {
                return Err(failure(&current, io::ErrorKind::PermissionDenied, "denied"));
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self.write()?;

        if inner.denied.contains(path) {
            return Err(failure(path, io::ErrorKind::PermissionDenied, "denied"));
        }
        if inner.directories.contains(path) {
            return Err(failure(path, io::ErrorKind::IsADirectory, "is a directory"));
        }
        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(failure(
                    path,
                    io::ErrorKind::NotFound,
                    "parent directory does not exist",
                ));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn rename(&self, from: &Path, to: &Path) -> ForgeResult<()> {
        let mut inner = self.write()?;

        if !inner.directories.contains(from) {
            return Err(failure(from, io::ErrorKind::NotFound, "no such directory"));
        }
        if inner.directories.contains(to) || inner.files.contains_key(to) {
            return Err(failure(to, io::ErrorKind::AlreadyExists, "destination exists"));
        }

        let moved = |p: &Path| p.strip_prefix(from).ok().map(|rest| to.join(rest));

        let dirs: Vec<PathBuf> = inner.directories.iter().filter_map(|p| moved(p)).collect();
        inner.directories.retain(|p| !p.starts_with(from));
        inner.directories.extend(dirs);

        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| moved(p).map(|np| (np, c.clone())))
            .collect();
        inner.files.retain(|p, _| !p.starts_with(from));
        inner.files.extend(files);

        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write()?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

fn failure(path: &Path, kind: io::ErrorKind, reason: &str) -> ForgeError {
    ApplicationError::MaterializationFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
        kind,
    }
    .into()
}

fn poisoned() -> ForgeError {
    ForgeError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}
