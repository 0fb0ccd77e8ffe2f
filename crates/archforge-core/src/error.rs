//! Unified error handling for archforge core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions and a stable kind for callers that
//! branch on the failure.

use std::path::Path;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for archforge core operations.
#[derive(Debug, Error, Clone)]
pub enum ForgeError {
    /// Errors from the domain layer (bad input or bad template data).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (conflicts, I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// The four failures callers distinguish, plus everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownArchitecture,
    InvalidModuleIdentifier,
    DestinationConflict,
    MaterializationFailed,
    Other,
}

impl ForgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::UnknownArchitecture { .. }) => ErrorKind::UnknownArchitecture,
            Self::Domain(DomainError::InvalidModuleIdentifier { .. }) => {
                ErrorKind::InvalidModuleIdentifier
            }
            Self::Application(ApplicationError::DestinationConflict { .. }) => {
                ErrorKind::DestinationConflict
            }
            Self::Application(ApplicationError::MaterializationFailed { .. }) => {
                ErrorKind::MaterializationFailed
            }
            _ => ErrorKind::Other,
        }
    }

    /// Path involved in the failure, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Application(ApplicationError::DestinationConflict { path })
            | Self::Application(ApplicationError::MaterializationFailed { path, .. }) => {
                Some(path.as_path())
            }
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in archforge".into(),
                "Please report this issue at: https://github.com/archforge/archforge/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Filesystem,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ForgeResult<T> = Result<T, ForgeError>;
