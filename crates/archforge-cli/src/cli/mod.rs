//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archforge",
    bin_name = "archforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Go projects for common architecture patterns",
    long_about = "archforge generates a Go project skeleton for one of eleven \
                  architecture patterns, with your module path filled in.",
    after_help = "EXAMPLES:\n\
        \x20 archforge generate\n\
        \x20 archforge generate -a clean -m github.com/user/project\n\
        \x20 archforge preview hexagonal\n\
        \x20 archforge completions bash > /usr/share/bash-completion/completions/archforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a Go project structure.
    #[command(
        visible_alias = "gen",
        about = "Generate a Go project structure",
        long_about = "Generate a Go project with the specified architecture pattern.\n\n\
            Supported architectures:\n\
            \x20 flat        Simple flat structure\n\
            \x20 ddd         Domain-Driven Design\n\
            \x20 clean       Clean Architecture\n\
            \x20 feature     Feature-based structure\n\
            \x20 hexagonal   Hexagonal Architecture\n\
            \x20 modular     Modular monolith\n\
            \x20 monorepo    Monorepo structure\n\
            \x20 cqrs        Command Query Responsibility Segregation\n\
            \x20 onion       Onion Architecture\n\
            \x20 common      Standard Go project layout\n\
            \x20 layered     Layered architecture",
        after_help = "EXAMPLES:\n\
            \x20 archforge generate\n\
            \x20 archforge generate -a clean -m github.com/user/project\n\
            \x20 archforge generate -a ddd -m github.com/user/shop --dry-run"
    )]
    Generate(GenerateArgs),

    /// List available architectures.
    #[command(
        visible_alias = "ls",
        about = "List available architectures",
        after_help = "EXAMPLES:\n\
            \x20 archforge list\n\
            \x20 archforge list --format json"
    )]
    List(ListArgs),

    /// Print the tree an architecture would generate.
    #[command(
        about = "Preview an architecture's project tree",
        after_help = "EXAMPLES:\n\
            \x20 archforge preview clean"
    )]
    Preview(PreviewArgs),

    /// Initialise an archforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 archforge init\n\
            \x20 archforge --config ./archforge.toml init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archforge completions bash > ~/.local/share/bash-completion/completions/archforge\n\
            \x20 archforge completions zsh  > ~/.zfunc/_archforge\n\
            \x20 archforge completions fish > ~/.config/fish/completions/archforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the archforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 archforge config get defaults.module\n\
            \x20 archforge config list\n\
            \x20 archforge config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `archforge generate`.
///
/// With both `--arch` and `--module` the command runs without prompts.
/// Otherwise the missing values are asked for interactively.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Architecture pattern.
    #[arg(
        short = 'a',
        long = "arch",
        value_name = "ARCH",
        help = "Architecture type"
    )]
    pub arch: Option<String>,

    /// Go module path.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Go module name (e.g. github.com/user/project)"
    )]
    pub module: Option<String>,

    /// Skip the fuzzy finders and use the numbered menu.
    #[arg(
        long = "no-fuzzy",
        help = "Disable fuzzy UI and use numeric selection"
    )]
    pub no_fuzzy: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Generate into an existing project directory.
    #[arg(long = "force", help = "Overwrite an existing project directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Write into a staging directory and move it into place when complete.
    #[arg(
        long = "staged",
        help = "Write atomically through a staging directory"
    )]
    pub staged: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `archforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Names with descriptions.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `archforge preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Architecture to preview.
    #[arg(value_name = "ARCH", help = "Architecture type")]
    pub arch: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `archforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `archforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `archforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.module`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
