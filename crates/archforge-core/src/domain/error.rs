// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ArchitectureName;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (stored inside the lazily built registry)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // User input errors
    // ========================================================================
    #[error("unsupported architecture '{name}'. Supported: {}", ArchitectureName::supported_list())]
    UnknownArchitecture { name: String },

    #[error("invalid module name format '{module}': {reason}")]
    InvalidModuleIdentifier { module: String, reason: String },

    // ========================================================================
    // Template integrity errors (built-in data is wrong)
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{architecture}' has no entries")]
    EmptyTemplate { architecture: String },

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Parent directory of '{path}' is not declared before it")]
    MissingParentDirectory { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownArchitecture { .. } => vec![
                format!("Supported architectures: {}", ArchitectureName::supported_list()),
                "Names are case-sensitive".into(),
                "Try: archforge list".into(),
            ],
            Self::InvalidModuleIdentifier { .. } => vec![
                "Module names start with a letter and end with a letter or digit".into(),
                "Allowed characters: letters, digits, '.', '_', '/', '-'".into(),
                "Example: github.com/user/project".into(),
            ],
            Self::EmptyTemplate { architecture } => vec![
                format!("Built-in template '{}' is corrupted", architecture),
                "Please report this issue or use a different architecture".into(),
            ],
            _ => vec!["This is a defect in the built-in templates, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownArchitecture { .. } => ErrorCategory::NotFound,
            Self::InvalidModuleIdentifier { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }

    /// True when the error comes from user input rather than template data.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownArchitecture { .. } | Self::InvalidModuleIdentifier { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
