//! Tracing subscriber initialisation.
//!
//! Only the CLI installs a subscriber. `archforge-core` and
//! `archforge-adapters` emit spans and events and never touch subscribers.
//!
//! `RUST_LOG` overrides the level derived from `-v`/`--quiet`.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events reach the terminal.
const CRATES: [&str; 3] = ["archforge", "archforge_core", "archforge_adapters"];

/// Install the global tracing subscriber, writing to stderr.
///
/// Must run once, before any tracing macro fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(args.log_level())))
        .context("invalid log filter")?;

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// One directive per workspace crate, all at `level`.
fn default_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            default_directives("debug"),
            "archforge=debug,archforge_core=debug,archforge_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_a_filter() {
        assert!(EnvFilter::try_new(default_directives("warn")).is_ok());
    }
}
