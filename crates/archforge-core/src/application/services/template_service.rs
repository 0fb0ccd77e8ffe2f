//! Template Service - registry queries and previews.
//!
//! Holds only a `TemplateStore`: with no filesystem port in reach, previews
//! cannot touch the disk. Separated from ScaffoldService for that reason.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{ArchitectureName, ArchitectureTemplate, preview},
    error::ForgeResult,
};

/// Information about an architecture for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureInfo {
    pub name: ArchitectureName,
    pub description: String,
    pub project_dir: String,
    pub directories: usize,
    pub files: usize,
}

impl From<&ArchitectureTemplate> for ArchitectureInfo {
    fn from(t: &ArchitectureTemplate) -> Self {
        Self {
            name: t.architecture,
            description: t.description().to_string(),
            project_dir: t.architecture.project_dir_name(),
            directories: t.directory_count(),
            files: t.file_count(),
        }
    }
}

/// Service for template queries.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by architecture name (exact, case-sensitive).
    pub fn get(&self, name: &str) -> ForgeResult<ArchitectureTemplate> {
        self.store.lookup(name)
    }

    /// List all templates in canonical order.
    pub fn list(&self) -> ForgeResult<Vec<ArchitectureTemplate>> {
        self.store.list()
    }

    /// Summaries of every architecture in canonical order.
    pub fn architectures(&self) -> ForgeResult<Vec<ArchitectureInfo>> {
        Ok(self.store.list()?.iter().map(ArchitectureInfo::from).collect())
    }

    /// Text tree of the project an architecture would generate.
    #[instrument(skip(self))]
    pub fn preview(&self, name: &str) -> ForgeResult<String> {
        let template = self.store.lookup(name)?;
        debug!(entries = template.tree.len(), "Rendering preview");
        Ok(preview::render_tree(&template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::ForgeError;

    struct OneTemplate(ArchitectureTemplate);

    impl TemplateStore for OneTemplate {
        fn get(&self, name: ArchitectureName) -> ForgeResult<ArchitectureTemplate> {
            if name == self.0.architecture {
                Ok(self.0.clone())
            } else {
                Err(ForgeError::Internal {
                    message: format!("no template for {name}"),
                })
            }
        }

        fn list(&self) -> ForgeResult<Vec<ArchitectureTemplate>> {
            Ok(vec![self.0.clone()])
        }
    }

    fn service() -> TemplateService {
        let template = ArchitectureTemplate::builder(ArchitectureName::Flat)
            .file("go.mod", "module {{MODULE}}\n")
            .file("main.go", "package main\n")
            .build()
            .unwrap();
        TemplateService::new(Box::new(OneTemplate(template)))
    }

    #[test]
    fn preview_renders_tree() {
        let tree = service().preview("flat").unwrap();
        assert_eq!(tree, "project_flat/\n├── go.mod\n└── main.go\n");
    }

    #[test]
    fn preview_rejects_unknown_name() {
        let err = service().preview("Flat").unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Domain(DomainError::UnknownArchitecture { .. })
        ));
    }

    #[test]
    fn architectures_summarize_templates() {
        let infos = service().architectures().unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].name, ArchitectureName::Flat);
        assert_eq!(infos[0].files, 2);
        assert_eq!(infos[0].directories, 0);
        assert_eq!(infos[0].project_dir, "project_flat");
        assert_eq!(infos[0].description, "Simple flat structure");
    }
}
