//! Placeholder substitution renderer.

use std::path::Path;

use archforge_core::{
    application::ports::TemplateRenderer,
    domain::{ArchitectureTemplate, DomainValidator as validator, ProjectStructure, RenderContext},
    error::ForgeResult,
};
use tracing::{debug, instrument};

/// Renderer backed by the domain's single-pass placeholder substitution.
///
/// Validates the template before rendering. The rendered structure is
/// checked by the caller.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(architecture = %template.architecture))]
    fn render(
        &self,
        template: &ArchitectureTemplate,
        context: &RenderContext,
        output_root: &Path,
    ) -> ForgeResult<ProjectStructure> {
        validator::validate_template(template)?;

        let structure = template.render(context, output_root);
        debug!(
            entries = structure.entry_count(),
            bytes = structure.total_size(),
            "Rendered"
        );

        Ok(structure)
    }
}
