//! Implementation of the `archforge preview` command.

use tracing::instrument;

use crate::{cli::PreviewArgs, commands, error::CliResult, output::OutputManager};

/// Print the tree an architecture would generate. Touches no files.
#[instrument(skip_all, fields(arch = %args.arch))]
pub fn execute(args: PreviewArgs, output: OutputManager) -> CliResult<()> {
    let tree = commands::template_service().preview(&args.arch)?;
    output.tree(&tree)?;
    Ok(())
}
