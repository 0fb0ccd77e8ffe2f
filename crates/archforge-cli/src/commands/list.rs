//! Implementation of the `archforge list` command.

use crate::{
    cli::{ListArgs, ListFormat},
    commands,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let architectures = commands::template_service().architectures()?;

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available architectures:")?;
            for info in &architectures {
                output.print(&format!(
                    "  {:<10}  {:<42} {:>2} dirs  {:>2} files",
                    info.name.as_str(),
                    info.description,
                    info.directories,
                    info.files
                ))?;
            }
        }

        // JSON and plain names bypass quiet mode: they are the command's result.
        ListFormat::Json => output.json(&architectures)?,

        ListFormat::List => {
            for info in &architectures {
                println!("{}", info.name);
            }
        }
    }

    Ok(())
}
