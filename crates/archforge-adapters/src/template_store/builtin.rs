//! Compiled-in template registry.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use archforge_core::{
    application::ports::TemplateStore,
    domain::{ArchitectureName, ArchitectureTemplate, DomainError, DomainValidator as validator},
    error::{ForgeError, ForgeResult},
};
use tracing::{debug, error};

use crate::builtin_templates;

type Registry = BTreeMap<ArchitectureName, ArchitectureTemplate>;

static REGISTRY: OnceLock<Result<Registry, DomainError>> = OnceLock::new();

/// Read-only store over the built-in Go templates.
///
/// The registry is built and validated once per process. Every lookup
/// returns an owned copy, so callers never share mutable state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }

    /// Number of registered architectures.
    pub fn len(&self) -> ForgeResult<usize> {
        Ok(registry()?.len())
    }

    pub fn is_empty(&self) -> ForgeResult<bool> {
        Ok(registry()?.is_empty())
    }
}

fn registry() -> ForgeResult<&'static Registry> {
    REGISTRY
        .get_or_init(load)
        .as_ref()
        .map_err(|e| ForgeError::Internal {
            message: format!("built-in template registry is invalid: {e}"),
        })
}

fn load() -> Result<Registry, DomainError> {
    let templates = builtin_templates::all_templates()?;
    validator::validate_registry(&templates).inspect_err(|e| {
        error!(error = %e, "Built-in template registry failed validation");
    })?;

    debug!(count = templates.len(), "Built-in templates loaded");
    Ok(templates
        .into_iter()
        .map(|template| (template.architecture, template))
        .collect())
}

impl TemplateStore for BuiltinStore {
    fn get(&self, name: ArchitectureName) -> ForgeResult<ArchitectureTemplate> {
        registry()?
            .get(&name)
            .cloned()
            .ok_or_else(|| ForgeError::Internal {
                message: format!("no built-in template for '{name}'"),
            })
    }

    fn list(&self) -> ForgeResult<Vec<ArchitectureTemplate>> {
        let registry = registry()?;
        ArchitectureName::ALL
            .iter()
            .map(|name| {
                registry.get(name).cloned().ok_or_else(|| ForgeError::Internal {
                    message: format!("no built-in template for '{name}'"),
                })
            })
            .collect()
    }
}
