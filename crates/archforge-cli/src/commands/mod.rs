//! Subcommand handlers.
//!
//! Each handler turns parsed arguments into calls on the core services and
//! renders the result. Adapter wiring lives here so handlers stay small.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
pub mod preview;

use archforge_adapters::{BuiltinStore, LocalFilesystem, SimpleRenderer};
use archforge_core::application::{ScaffoldService, TemplateService, WriteMode};

/// Read-only template service over the built-in registry.
pub(crate) fn template_service() -> TemplateService {
    TemplateService::new(Box::new(BuiltinStore::new()))
}

/// Scaffold service writing under the current directory.
pub(crate) fn scaffold_service(write_mode: WriteMode) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_write_mode(write_mode)
}
