use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A `/`-separated path guaranteed to stay inside the project root.
///
/// Invariant: never absolute, never empty, no `..`, `.` or empty segments.
/// Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();

        if path.is_empty() {
            return Err(DomainError::InvalidTemplate("empty path".into()));
        }
        if path.starts_with('/') || path.starts_with('\\') || Path::new(&path).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path });
        }
        for segment in path.split('/') {
            match segment {
                ".." => return Err(DomainError::PathEscapesRoot { path }),
                "" | "." => {
                    return Err(DomainError::InvalidTemplate(format!(
                        "malformed path '{path}'"
                    )));
                }
                s if s.contains('\\') => {
                    return Err(DomainError::InvalidTemplate(format!(
                        "backslash in path '{path}'"
                    )));
                }
                _ => {}
            }
        }

        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Path segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Last segment: `internal/domain/user.go` → `user.go`.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Enclosing directory, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(parent, _)| parent)
    }

    /// Nesting depth: 0 for top-level entries.
    pub fn depth(&self) -> usize {
        self.0.matches('/').count()
    }

    /// Resolve against a host directory using native separators.
    pub fn to_native(&self, root: &Path) -> PathBuf {
        self.segments().fold(root.to_path_buf(), |acc, s| acc.join(s))
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
