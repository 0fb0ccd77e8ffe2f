//! Implementation of the `archforge generate` command.
//!
//! Responsibility: resolve the architecture and module (from flags or
//! prompts), show the preview, and hand over to the core scaffold service.
//! No generation logic lives here.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use archforge_core::{
    application::{ApplicationError, WriteMode},
    domain::{ArchitectureName, ArchitectureTemplate, ModuleIdentifier},
    error::ForgeError,
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
    selection::SelectorChain,
};

/// Result of a generation, as printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    module: &'a str,
    architecture: ArchitectureName,
    location: String,
    dry_run: bool,
}

/// Execute the `archforge generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the architecture (flag or selection chain)
/// 2. Resolve the module (flag or prompt) and validate it
/// 3. Handle an existing project directory
/// 4. Print the preview; stop here on `--dry-run`
/// 5. Confirm (interactive mode only, unless `--yes`)
/// 6. Materialize and print next steps
#[instrument(skip_all, fields(arch = ?args.arch, module = ?args.module))]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let interactive = args.arch.is_none() || args.module.is_none();
    let templates = commands::template_service();

    // 1. Architecture. The selection chain holds the stdin lock and is
    //    dropped before any other prompt.
    let architecture = match args.arch.as_deref() {
        Some(name) => name.parse::<ArchitectureName>().map_err(ForgeError::from)?,
        None => select_architecture(&args, &config)?,
    };

    // 2. Module.
    let mut prompter = Prompter::stdio();
    let module = match args.module.clone() {
        Some(module) => module,
        None => prompter.ask("Go module name", &config.defaults.module)?,
    };
    let module = ModuleIdentifier::parse(module).map_err(ForgeError::from)?;

    debug!(%architecture, %module, interactive, "Inputs resolved");

    // 3. Existing destination.
    let service = commands::scaffold_service(write_mode(&args, &config));
    let project_dir = architecture.project_dir_name();
    let exists = service.destination_exists(architecture);
    let mut overwrite = args.force;

    if exists && !args.dry_run {
        if overwrite {
            output.warning(&format!(
                "project directory '{project_dir}' already exists, generating into it"
            ))?;
        } else if interactive {
            output.warning(&format!("project directory '{project_dir}' already exists"))?;
            if !prompter.confirm("Do you want to overwrite the existing directory?", false)? {
                output.print("Generation cancelled.")?;
                return Ok(());
            }
            overwrite = true;
        } else {
            return Err(ForgeError::from(ApplicationError::DestinationConflict {
                path: service.project_root(architecture),
            })
            .into());
        }
    }

    // 4. Preview.
    let template = templates.get(architecture.as_str())?;
    if !output.is_json() && !output.is_quiet() {
        output.print(&format!("\nProject structure preview ({architecture}):"))?;
        output.tree(&templates.preview(architecture.as_str())?)?;
    }

    let summary = Summary {
        module: module.as_str(),
        architecture,
        location: format!("./{project_dir}/"),
        dry_run: args.dry_run,
    };

    if args.dry_run {
        if exists {
            output.warning(&format!("project directory '{project_dir}' already exists"))?;
        }
        if output.is_json() {
            output.json(&summary)?;
        } else {
            output.info("Dry run: no files were written.")?;
        }
        return Ok(());
    }

    // 5. Confirm.
    if interactive && !args.yes && !prompter.confirm("Generate project?", true)? {
        output.print("Generation cancelled.")?;
        return Ok(());
    }
    drop(prompter);

    // 6. Generate.
    let spinner = output.spinner("Generating project...")?;
    let result = service.materialize(architecture.as_str(), module.as_str(), exists, overwrite);
    spinner.finish_and_clear();
    let root = result?;
    info!(path = %root.display(), "Project generated");

    if output.is_json() {
        return output.json(&summary);
    }

    output.print("")?;
    output.success("Project generated successfully!")?;
    output.print(&format!("Module: {module}"))?;
    output.print(&format!("Architecture: {architecture}"))?;
    output.print(&format!("Location: {}", summary.location))?;
    output.print("")?;
    output.header("Next steps:")?;
    output.print(&format!("  cd {project_dir}"))?;
    output.print("  go mod tidy")?;
    output.print(&format!("  go run {}", run_target(&template)))?;

    Ok(())
}

fn select_architecture(args: &GenerateArgs, config: &AppConfig) -> CliResult<ArchitectureName> {
    let preferred = config.defaults.architecture.as_deref().and_then(|name| {
        name.parse::<ArchitectureName>()
            .inspect_err(|e| warn!(error = %e, "Ignoring defaults.architecture"))
            .ok()
    });

    let mut chain = SelectorChain::standard(config.generate.fuzzy && !args.no_fuzzy);
    chain.select(&ArchitectureName::ALL, preferred)
}

fn write_mode(args: &GenerateArgs, config: &AppConfig) -> WriteMode {
    if args.staged || config.generate.staged {
        WriteMode::Staged
    } else {
        WriteMode::Direct
    }
}

/// `go run` argument for the template's first `main.go`.
fn run_target(template: &ArchitectureTemplate) -> String {
    let entry = template
        .paths()
        .find(|path| path.file_name() == "main.go")
        .and_then(|path| path.parent());

    match entry {
        Some(dir) => format!("./{dir}"),
        None => ".".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archforge_adapters::BuiltinStore;
    use archforge_core::application::ports::TemplateStore;

    fn args(staged: bool) -> GenerateArgs {
        GenerateArgs {
            arch: None,
            module: None,
            no_fuzzy: true,
            yes: false,
            force: false,
            dry_run: false,
            staged,
        }
    }

    fn target(architecture: ArchitectureName) -> String {
        run_target(&BuiltinStore.get(architecture).unwrap())
    }

    #[test]
    fn run_target_points_at_the_entry_package() {
        assert_eq!(target(ArchitectureName::Flat), ".");
        assert_eq!(target(ArchitectureName::Clean), ".");
        assert_eq!(target(ArchitectureName::Ddd), "./cmd/app");
        assert_eq!(target(ArchitectureName::Feature), "./cmd/server");
        assert_eq!(target(ArchitectureName::Monorepo), "./services/api");
    }

    #[test]
    fn staged_mode_from_flag_or_config() {
        let mut config = AppConfig::default();
        assert_eq!(write_mode(&args(false), &config), WriteMode::Direct);
        assert_eq!(write_mode(&args(true), &config), WriteMode::Staged);

        config.generate.staged = true;
        assert_eq!(write_mode(&args(false), &config), WriteMode::Staged);
    }
}
