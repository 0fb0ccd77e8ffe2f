//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not template
//! logic. Template and input errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The project root already exists and overwriting was not authorized.
    #[error("project directory {} already exists", path.display())]
    DestinationConflict { path: PathBuf },

    /// A directory or file could not be created or written.
    #[error("failed to write {}: {reason}", path.display())]
    MaterializationFailed {
        path: PathBuf,
        reason: String,
        kind: io::ErrorKind,
    },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Build a `MaterializationFailed` from an I/O error.
    pub fn materialization(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::MaterializationFailed {
            path: path.into(),
            reason: err.to_string(),
            kind: err.kind(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationConflict { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to generate into it anyway".into(),
                "Or run from a different directory".into(),
            ],
            Self::MaterializationFailed { path, kind, .. } => {
                let mut hints = vec![format!("Failed to create: {}", path.display())];
                match kind {
                    io::ErrorKind::PermissionDenied => {
                        hints.push("Check that you have write permissions".into())
                    }
                    io::ErrorKind::AlreadyExists | io::ErrorKind::NotADirectory => {
                        hints.push("A file is in the way of a directory the template needs".into())
                    }
                    _ => hints.push("Ensure the parent directory exists and is writable".into()),
                }
                hints.push("Files written before the failure were left in place".into());
                hints
            }
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationConflict { .. } => ErrorCategory::Conflict,
            Self::MaterializationFailed { .. } => ErrorCategory::Filesystem,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialization_keeps_path_and_kind() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ApplicationError::materialization("/ro/project_flat/go.mod", &io_err);
        match &err {
            ApplicationError::MaterializationFailed { path, kind, .. } => {
                assert_eq!(path, &PathBuf::from("/ro/project_flat/go.mod"));
                assert_eq!(*kind, io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(err.to_string().contains("go.mod"));
        assert!(err.suggestions().iter().any(|s| s.contains("permissions")));
    }

    #[test]
    fn conflict_suggests_force() {
        let err = ApplicationError::DestinationConflict {
            path: PathBuf::from("project_clean"),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }
}
