//! Domain value objects: ArchitectureName, ModuleIdentifier.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Both are validated at construction, so every function that receives one
//! can rely on it being well-formed without re-checking.
//!
//! # Adding New Architectures
//!
//! 1. Add the enum variant here and to [`ArchitectureName::ALL`]
//! 2. Add the `as_str` and `description` arms here
//! 3. Add a template function in `archforge-adapters::builtin_templates`
//! 4. Done: parsing, listing and the CLI pick it up automatically

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix of every generated project root directory (`project_clean`, ...).
pub const PROJECT_DIR_PREFIX: &str = "project_";

// ── ArchitectureName ─────────────────────────────────────────────────────────

/// A supported project architecture.
///
/// The set is closed. Parsing is exact and case-sensitive: `"Clean"` and
/// `"cleann"` are both rejected with [`DomainError::UnknownArchitecture`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureName {
    Flat,
    Ddd,
    Clean,
    Feature,
    Hexagonal,
    Modular,
    Monorepo,
    Cqrs,
    Onion,
    Common,
    Layered,
}

impl ArchitectureName {
    /// Every architecture, in canonical listing order.
    pub const ALL: [Self; 11] = [
        Self::Flat,
        Self::Ddd,
        Self::Clean,
        Self::Feature,
        Self::Hexagonal,
        Self::Modular,
        Self::Monorepo,
        Self::Cqrs,
        Self::Onion,
        Self::Common,
        Self::Layered,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Ddd => "ddd",
            Self::Clean => "clean",
            Self::Feature => "feature",
            Self::Hexagonal => "hexagonal",
            Self::Modular => "modular",
            Self::Monorepo => "monorepo",
            Self::Cqrs => "cqrs",
            Self::Onion => "onion",
            Self::Common => "common",
            Self::Layered => "layered",
        }
    }

    /// One-line summary shown by `list` and the interactive selector.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Flat => "Simple flat structure",
            Self::Ddd => "Domain-Driven Design",
            Self::Clean => "Clean Architecture",
            Self::Feature => "Feature-based structure",
            Self::Hexagonal => "Hexagonal Architecture",
            Self::Modular => "Modular monolith",
            Self::Monorepo => "Monorepo structure",
            Self::Cqrs => "Command Query Responsibility Segregation",
            Self::Onion => "Onion Architecture",
            Self::Common => "Standard Go project layout",
            Self::Layered => "Layered architecture",
        }
    }

    /// Name of the project root directory, e.g. `project_clean`.
    pub fn project_dir_name(&self) -> String {
        format!("{PROJECT_DIR_PREFIX}{}", self.as_str())
    }

    /// Comma-separated list of every supported name, for error messages.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ArchitectureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchitectureName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| DomainError::UnknownArchitecture { name: s.to_string() })
    }
}

// ── ModuleIdentifier ─────────────────────────────────────────────────────────

/// A validated Go module path such as `github.com/user/project`.
///
/// Grammar: an ASCII letter, then letters, digits, `.`, `_`, `/` or `-`,
/// ending with a letter or digit. At least two characters long.
///
/// Validated once in [`ModuleIdentifier::parse`] and used verbatim afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleIdentifier(String);

impl ModuleIdentifier {
    /// Validate and wrap a module identifier.
    pub fn parse(input: impl Into<String>) -> Result<Self, DomainError> {
        let input = input.into();
        if let Err(reason) = check_module_syntax(&input) {
            return Err(DomainError::InvalidModuleIdentifier {
                module: input,
                reason,
            });
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last `/`-separated segment: `github.com/user/project` → `project`.
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn check_module_syntax(input: &str) -> Result<(), String> {
    let mut chars = input.chars();

    let Some(first) = chars.next() else {
        return Err("module name cannot be empty".into());
    };
    if !first.is_ascii_alphabetic() {
        return Err(format!("must start with a letter, found '{first}'"));
    }
    if let Some(bad) = input
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '/' | '-')))
    {
        return Err(format!("invalid character '{bad}'"));
    }
    if input.len() < 2 {
        return Err("must be at least 2 characters long".into());
    }
    match chars.next_back() {
        Some(last) if !last.is_ascii_alphanumeric() => {
            Err(format!("must end with a letter or digit, found '{last}'"))
        }
        _ => Ok(()),
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ModuleIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
