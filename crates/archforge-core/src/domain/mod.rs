// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for archforge.
//!
//! This module contains pure logic with no I/O. Filesystem access and the
//! template registry are reached through ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No heavy crates**: std library, thiserror and serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Rendering and validation live on the entities
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod preview;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    template::{
        ArchitectureTemplate, DirectorySpec, FileSpec, Placeholder, RenderContext,
        TemplateBuilder, TemplateContent, TemplateNode, TemplateSource, TemplateTree, render,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use preview::{preview_paths, render_tree};

pub use value_objects::{ArchitectureName, ModuleIdentifier, PROJECT_DIR_PREFIX};

pub use validation::DomainValidator;
