//! Architecture template aggregate and placeholder rendering.
//!
//! A template is the declarative description of one Go project layout: an
//! ordered list of directories and files, some of whose contents carry
//! placeholders for the module identifier.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Template Domain                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ArchitectureTemplate (Aggregate Root)                      │
//! │  ├── ArchitectureName (Value Object) - which layout         │
//! │  └── TemplateTree (Value Object) - what to create           │
//! │       └── Vec<TemplateNode>                                 │
//! │            ├── FileSpec (path, content)                     │
//! │            └── DirectorySpec (path)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── {{MODULE}} -> "github.com/user/project"                │
//! │      {{MODULE_NAME}} -> "project"                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! A validated template:
//! 1. Has at least one entry
//! 2. Has no duplicate paths
//! 3. Only contains relative paths that stay inside the project root
//! 4. Declares every directory before anything nested inside it
//!
//! (3) is guaranteed by [`RelativePath`]; the rest by
//! [`ArchitectureTemplate::validate`].
//!
//! ## Why Two Content Types: `Literal` vs `Parameterized`?
//!
//! Literal content skips the placeholder scan entirely. The builder picks the
//! variant automatically by looking for `{{`.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use super::project_structure::ProjectStructure;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{ArchitectureName, ModuleIdentifier},
};

// ============================================================================
// Placeholders
// ============================================================================

/// A substitution marker recognised inside parameterized file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// The full module identifier.
    Module,
    /// The last `/`-separated segment of the module identifier.
    ModuleName,
}

impl Placeholder {
    pub const ALL: [Self; 2] = [Self::Module, Self::ModuleName];

    /// Literal marker text, braces included.
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Module => "{{MODULE}}",
            Self::ModuleName => "{{MODULE_NAME}}",
        }
    }
}

/// Context for template rendering.
///
/// Immutable after creation. Holds the validated module identifier every
/// placeholder is derived from.
///
/// ## Placeholders
///
/// | Marker | Example |
/// |--------|---------|
/// | `{{MODULE}}` | `github.com/user/project` |
/// | `{{MODULE_NAME}}` | `project` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    module: ModuleIdentifier,
}

impl RenderContext {
    pub fn new(module: ModuleIdentifier) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &ModuleIdentifier {
        &self.module
    }

    /// Value substituted for a placeholder.
    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Module => self.module.as_str(),
            Placeholder::ModuleName => self.module.last_segment(),
        }
    }

    /// Render a template string by replacing placeholders.
    ///
    /// # Algorithm
    ///
    /// One left-to-right scan. Substituted text is appended to the output and
    /// never rescanned, so a module identifier that itself contains `{{MODULE}}`
    /// cannot trigger a second substitution.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{MODULE}}{{MODULE}}` → both replaced
    /// - Nested braces `{{{MODULE}}}` → outer braces preserved, inner replaced
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            match Placeholder::ALL.iter().find(|p| tail.starts_with(p.marker())) {
                Some(placeholder) => {
                    out.push_str(self.value(*placeholder));
                    rest = &tail[placeholder.marker().len()..];
                }
                None => {
                    // Step over one brace so `{{{MODULE}}}` still matches.
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Render `template` for `module` in one call.
pub fn render(template: &str, module: &ModuleIdentifier) -> String {
    RenderContext::new(module.clone()).render(template)
}

// ============================================================================
// Template Aggregate
// ============================================================================

/// Complete description of one architecture's project skeleton.
///
/// ## Lifecycle
///
/// 1. **Construction:** via [`ArchitectureTemplate::builder`]
/// 2. **Validation:** `build()` calls [`validate`](Self::validate)
/// 3. **Rendering:** [`render`](Self::render) produces a `ProjectStructure`
#[derive(Debug, Clone, PartialEq)]
pub struct ArchitectureTemplate {
    pub architecture: ArchitectureName,
    pub tree: TemplateTree,
}

impl ArchitectureTemplate {
    /// Start the builder pattern for fluent construction.
    ///
    /// # Example
    /// ```rust,ignore
    /// let template = ArchitectureTemplate::builder(ArchitectureName::Flat)
    ///     .file("go.mod", "module {{MODULE}}\n")
    ///     .file("main.go", "package main\n")
    ///     .build()?;
    /// ```
    pub fn builder(architecture: ArchitectureName) -> TemplateBuilder {
        TemplateBuilder {
            architecture,
            tree: TemplateTree::new(),
            error: None,
        }
    }

    pub fn description(&self) -> &'static str {
        self.architecture.description()
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tree.is_empty() {
            return Err(DomainError::EmptyTemplate {
                architecture: self.architecture.to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut declared_dirs = HashSet::new();

        for node in &self.tree.nodes {
            let path = node.path();

            if !seen.insert(path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }

            if path.parent().is_some_and(|parent| !declared_dirs.contains(parent)) {
                return Err(DomainError::MissingParentDirectory {
                    path: path.to_string(),
                });
            }

            if node.is_directory() {
                declared_dirs.insert(path.as_str());
            }
        }

        Ok(())
    }

    /// Relative paths of every entry, in template order.
    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.tree.nodes.iter().map(TemplateNode::path)
    }

    pub fn file_count(&self) -> usize {
        self.tree.nodes.iter().filter(|n| !n.is_directory()).count()
    }

    pub fn directory_count(&self) -> usize {
        self.tree.nodes.iter().filter(|n| n.is_directory()).count()
    }

    /// Produce the concrete structure rooted at `output_root`.
    ///
    /// Entries keep template order; parameterized contents are rendered with
    /// `ctx`, literal contents are copied.
    pub fn render(&self, ctx: &RenderContext, output_root: impl Into<PathBuf>) -> ProjectStructure {
        let mut structure = ProjectStructure::new(output_root);

        for node in &self.tree.nodes {
            match node {
                TemplateNode::Directory(dir) => structure.add_directory(dir.path.clone()),
                TemplateNode::File(file) => {
                    structure.add_file(file.path.clone(), file.content.render(ctx))
                }
            }
        }

        structure
    }
}

/// Builder for constructing templates with validation.
///
/// Path errors are deferred: the first invalid path is remembered and
/// reported by `build()`, so a chain of calls never panics.
#[derive(Debug)]
pub struct TemplateBuilder {
    architecture: ArchitectureName,
    tree: TemplateTree,
    error: Option<DomainError>,
}

impl TemplateBuilder {
    /// Add a directory entry.
    pub fn directory(self, path: &str) -> Self {
        self.with_path(path, |p| TemplateNode::Directory(DirectorySpec::new(p)))
    }

    /// Add a file entry. Contents with `{{` are stored as parameterized.
    pub fn file(self, path: &str, content: impl Into<TemplateSource>) -> Self {
        let source = content.into();
        let content = if source.contains_placeholder() {
            TemplateContent::Parameterized(source)
        } else {
            TemplateContent::Literal(source)
        };
        self.with_path(path, |p| TemplateNode::File(FileSpec::new(p, content)))
    }

    /// Add a single pre-built node (accumulates).
    pub fn add_node(mut self, node: TemplateNode) -> Self {
        self.tree.push(node);
        self
    }

    fn with_path(mut self, path: &str, make: impl FnOnce(RelativePath) -> TemplateNode) -> Self {
        match RelativePath::try_new(path) {
            Ok(p) => self.tree.push(make(p)),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Consume builder and construct a validated template.
    pub fn build(self) -> Result<ArchitectureTemplate, DomainError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let template = ArchitectureTemplate {
            architecture: self.architecture,
            tree: self.tree,
        };
        template.validate()?;
        Ok(template)
    }
}

// ============================================================================
// Tree Structure
// ============================================================================

/// Ordered list of filesystem nodes.
///
/// Order matters: directories come before their contents, and the previewer
/// and materializer both walk entries in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateTree {
    pub nodes: Vec<TemplateNode>,
}

impl TemplateTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: TemplateNode) {
        self.nodes.push(node);
    }

    pub fn with_node(mut self, node: TemplateNode) -> Self {
        self.push(node);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

impl TemplateNode {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    /// Relative path from project root (e.g., "cmd/main.go")
    pub path: RelativePath,
    pub content: TemplateContent,
}

impl FileSpec {
    pub fn new(path: RelativePath, content: TemplateContent) -> Self {
        Self { path, content }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySpec {
    pub path: RelativePath,
}

impl DirectorySpec {
    pub fn new(path: RelativePath) -> Self {
        Self { path }
    }
}

// ============================================================================
// Content Types
// ============================================================================

/// Content specification for a file.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(TemplateSource),

    /// Content with placeholders to be substituted.
    Parameterized(TemplateSource),
}

impl TemplateContent {
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => source.as_str().to_owned(),
            Self::Parameterized(source) => ctx.render(source.as_str()),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized(_))
    }
}

/// Source of template content: either compile-time or runtime.
///
/// Built-in templates use `Static`; tests and future loaders use `Owned`.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    /// Quick check for placeholder syntax.
    pub fn contains_placeholder(&self) -> bool {
        self.as_str().contains("{{")
    }
}

impl PartialEq for TemplateSource {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
