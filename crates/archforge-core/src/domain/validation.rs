use crate::domain::{
    entities::{ArchitectureTemplate, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &ArchitectureTemplate) -> Result<(), DomainError> {
        template.validate()
    }

    /// Validate a whole registry: every template valid, no architecture twice.
    pub fn validate_registry<'a>(
        templates: impl IntoIterator<Item = &'a ArchitectureTemplate>,
    ) -> Result<(), DomainError> {
        let mut seen = std::collections::HashSet::new();
        for template in templates {
            template.validate()?;
            if !seen.insert(template.architecture) {
                return Err(DomainError::InvalidTemplate(format!(
                    "architecture '{}' registered twice",
                    template.architecture
                )));
            }
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
