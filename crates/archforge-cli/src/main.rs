//! `archforge` binary.
//!
//! Scaffolds a Go project for one of eleven architecture layouts. `main`
//! only wires things together: arguments, logging, configuration, output,
//! then one command handler. Every failure ends up in [`report`].
//!
//! Exit status: `0` success, `1` I/O or internal failure, `2` bad input or
//! an existing project directory, `3` unknown architecture, `4` unusable
//! configuration.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;
mod selection;

fn main() -> ExitCode {
    // RUST_LOG and ARCHFORGE_* may come from a local .env.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("archforge: cannot set up logging: {e}");
        return ExitCode::from(1);
    }
    debug!(command = ?cli.command, "Arguments parsed");

    let verbose = cli.global.verbose > 0;
    let plain_errors = cli.global.no_color || !std::io::stderr().is_terminal();

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return report(err, verbose, plain_errors);
        }
    };
    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report(e, verbose, plain_errors),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(cmd) => commands::generate::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, output),
        Commands::Preview(cmd) => commands::preview::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global.config, config, output),
    }
}

/// `--help` and `--version` surface as clap errors written to stdout.
fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { 2 } else { 0 }
}

/// Log `err`, print it with suggestions on stderr, and map it to an exit code.
fn report(err: CliError, verbose: bool, plain: bool) -> ExitCode {
    err.log();

    let message = if plain {
        err.format_plain(verbose)
    } else {
        err.format_colored(verbose)
    };
    eprint!("{message}");

    ExitCode::from(err.exit_code())
}
