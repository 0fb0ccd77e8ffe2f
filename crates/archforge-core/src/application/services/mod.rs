//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "preview a layout".

pub mod scaffold_service;
pub mod template_service;

pub use scaffold_service::{ScaffoldService, WriteMode};
pub use template_service::{ArchitectureInfo, TemplateService};
