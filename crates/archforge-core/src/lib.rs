//! archforge core - domain and application layers.
//!
//! This crate knows which Go project layouts exist, how their files are
//! rendered for a module identifier, how a layout previews as a tree, and how
//! a rendered layout is written through a filesystem port.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          archforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    archforge-adapters (Infrastructure)  │
//! │ (BuiltinStore, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ArchitectureTemplate, RenderContext,   │
//! │  ProjectStructure, preview)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use archforge_core::application::{ScaffoldService, TemplateService};
//!
//! // Preview: registry only, no filesystem port
//! let templates = TemplateService::new(store);
//! println!("{}", templates.preview("clean")?);
//!
//! // Generate under the current directory
//! let service = ScaffoldService::new(store, renderer, filesystem);
//! let root = service.materialize("clean", "github.com/user/project", false, false)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArchitectureInfo, ScaffoldService, TemplateService, WriteMode,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArchitectureName, ArchitectureTemplate, ModuleIdentifier, ProjectStructure,
        RenderContext,
    };
    pub use crate::error::{ErrorKind, ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
