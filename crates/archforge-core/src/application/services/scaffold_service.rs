//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Validate the architecture name and module identifier
//! 2. Check the destination for conflicts
//! 3. Look up and render the template
//! 4. Write directories and files in template order
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{
        ArchitectureName, DomainValidator as validator, FsEntry, ModuleIdentifier,
        ProjectStructure, RenderContext,
    },
    error::ForgeResult,
};

/// How a rendered structure reaches the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write straight into the project root. A failure leaves the entries
    /// written so far in place.
    #[default]
    Direct,
    /// Write into a hidden sibling directory and rename it into place once
    /// complete. A failure removes the staging directory. Falls back to
    /// `Direct` when generating into an existing directory.
    Staged,
}

/// Main scaffolding service.
///
/// Orchestrates validation, rendering, and writing.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    base_dir: PathBuf,
    write_mode: WriteMode,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Projects are generated under the current directory unless
    /// [`with_base_dir`](Self::with_base_dir) says otherwise.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use archforge_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// let root = service.materialize("clean", "github.com/user/project", false, false)?;
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            base_dir: PathBuf::from("."),
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// `<base_dir>/project_<architecture>`.
    pub fn project_root(&self, architecture: ArchitectureName) -> PathBuf {
        self.base_dir.join(architecture.project_dir_name())
    }

    /// Whether the project root for `architecture` already exists.
    pub fn destination_exists(&self, architecture: ArchitectureName) -> bool {
        self.filesystem.exists(&self.project_root(architecture))
    }

    /// Render without writing anything.
    pub fn plan(&self, architecture: &str, module: &str) -> ForgeResult<ProjectStructure> {
        let (architecture, module) = parse_inputs(architecture, module)?;
        let root = self.project_root(architecture);
        self.render(architecture, module, &root)
    }

    /// Generate the project for `architecture` with `module` substituted.
    ///
    /// Both inputs are validated before any filesystem work. The destination
    /// is a conflict when `destination_exists` is set or the root is found on
    /// disk; a conflict without `overwrite_authorized` fails before anything
    /// is written. Existing files at template paths are overwritten; other
    /// files in an existing root are left alone.
    ///
    /// Returns the project root.
    #[instrument(
        skip_all,
        fields(
            architecture = %architecture,
            module = %module,
            mode = ?self.write_mode
        )
    )]
    pub fn materialize(
        &self,
        architecture: &str,
        module: &str,
        destination_exists: bool,
        overwrite_authorized: bool,
    ) -> ForgeResult<PathBuf> {
        let (architecture, module) = parse_inputs(architecture, module)?;

        let root = self.project_root(architecture);
        let exists = destination_exists || self.filesystem.exists(&root);
        if exists && !overwrite_authorized {
            return Err(ApplicationError::DestinationConflict { path: root }.into());
        }
        if exists {
            warn!(path = %root.display(), "Project directory exists, generating into it");
        }

        let structure = self.render(architecture, module, &root)?;
        info!(entries = structure.entry_count(), "Template rendered");

        match self.write_mode {
            WriteMode::Staged if !exists => self.write_staged(&structure, architecture)?,
            WriteMode::Staged => {
                debug!("Destination exists, staging skipped");
                self.write_direct(&structure)?
            }
            WriteMode::Direct => self.write_direct(&structure)?,
        }

        info!(path = %root.display(), "Project generated");
        Ok(root)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render(
        &self,
        architecture: ArchitectureName,
        module: ModuleIdentifier,
        root: &Path,
    ) -> ForgeResult<ProjectStructure> {
        let template = self.store.get(architecture)?;
        let context = RenderContext::new(module);
        let structure = self.renderer.render(&template, &context, root)?;
        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    fn write_direct(&self, structure: &ProjectStructure) -> ForgeResult<()> {
        self.write_entries(structure.root(), structure).inspect_err(|e| {
            warn!(error = %e, "Generation stopped, entries written so far were left in place");
        })
    }

    /// Write into a staging sibling, then rename over the project root.
    fn write_staged(
        &self,
        structure: &ProjectStructure,
        architecture: ArchitectureName,
    ) -> ForgeResult<()> {
        let staging = self.base_dir.join(format!(
            ".{}.staging-{}",
            architecture.project_dir_name(),
            Uuid::new_v4().simple()
        ));
        debug!(staging = %staging.display(), "Writing to staging directory");

        let result = self
            .write_entries(&staging, structure)
            .and_then(|()| self.filesystem.rename(&staging, structure.root()));

        if let Err(e) = result {
            warn!(error = %e, "Staged write failed, discarding staging directory");
            self.discard_staging(&staging);
            return Err(e);
        }
        Ok(())
    }

    /// Write all entries under `target`, directories before their contents.
    fn write_entries(&self, target: &Path, structure: &ProjectStructure) -> ForgeResult<()> {
        self.filesystem.create_dir_all(target)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&dir.path.to_native(target))?;
                }
                FsEntry::File(file) => {
                    let path = file.path.to_native(target);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort removal of a staging directory.
    fn discard_staging(&self, staging: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(staging) {
            warn!(
                error = %e,
                path = %staging.display(),
                "Could not remove staging directory"
            );
        } else {
            info!("Staging directory removed");
        }
    }
}

fn parse_inputs(
    architecture: &str,
    module: &str,
) -> ForgeResult<(ArchitectureName, ModuleIdentifier)> {
    let architecture: ArchitectureName = architecture.parse()?;
    let module = ModuleIdentifier::parse(module)?;
    Ok((architecture, module))
}
