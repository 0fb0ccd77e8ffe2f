//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `archforge-adapters` crate provides implementations.

use crate::domain::{ArchitectureName, ArchitectureTemplate, ProjectStructure, RenderContext};
use crate::error::ForgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `archforge_adapters::filesystem::LocalFilesystem` (production)
/// - `archforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures are reported as `ApplicationError::MaterializationFailed`
/// carrying the offending path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Move a directory to a new location on the same volume.
    fn rename(&self, from: &Path, to: &Path) -> ForgeResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for the architecture template registry.
///
/// Implemented by:
/// - `archforge_adapters::template_store::BuiltinStore` (compiled-in templates)
pub trait TemplateStore: Send + Sync {
    /// Get the template for an architecture.
    fn get(&self, name: ArchitectureName) -> ForgeResult<ArchitectureTemplate>;

    /// List every template in canonical architecture order.
    fn list(&self) -> ForgeResult<Vec<ArchitectureTemplate>>;

    /// Parse `name` exactly and return its template.
    ///
    /// Fails with `DomainError::UnknownArchitecture` for names outside the
    /// supported set.
    fn lookup(&self, name: &str) -> ForgeResult<ArchitectureTemplate> {
        let architecture: ArchitectureName = name.parse()?;
        self.get(architecture)
    }
}

/// Port for template rendering.
///
/// Implemented by:
/// - `archforge_adapters::renderer::SimpleRenderer` (placeholder substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template into a project structure.
    ///
    /// # Arguments
    ///
    /// * `template` - The template to render
    /// * `context` - Placeholder substitution context
    /// * `output_root` - Root directory for output paths
    fn render(
        &self,
        template: &ArchitectureTemplate,
        context: &RenderContext,
        output_root: &Path,
    ) -> ForgeResult<ProjectStructure>;
}
