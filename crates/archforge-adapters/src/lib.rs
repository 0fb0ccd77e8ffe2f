//! Infrastructure adapters for archforge.
//!
//! This crate implements the ports defined in `archforge_core::application::ports`.
//! It holds the built-in Go templates and all filesystem I/O.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_store::BuiltinStore;
