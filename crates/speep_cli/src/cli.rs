//! Command-line surface of `speep`.
//!
//! # Responsibility
//! - Declare subcommands and flags.
//! - Reject missing, empty, or conflicting flags before core is called.

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "speep",
    author,
    version,
    about = "Keep a personal list of keyboard shortcuts",
    long_about = "Record, list, search and delete keyboard shortcuts grouped by category.\n\nEnvironment:\n  XDG_CONFIG_HOME   Config root (default $HOME/.config); shortcuts live in speep/shortcuts.json\n  SPEEP_STORE       Use this shortcut file instead\n  SPEEP_LOG_LEVEL   trace|debug|info|warn|error|off\n"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "SPEEP_STORE",
        value_name = "PATH",
        help = "Shortcut file to use instead of the default location"
    )]
    pub store: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "SPEEP_LOG_LEVEL",
        value_name = "LEVEL",
        help = "Write logs at LEVEL to a logs directory next to the shortcut file"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show shortcuts.
    Get(GetArgs),
    /// Register a new shortcut.
    Add(AddArgs),
    /// Remove one shortcut or the whole list.
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("selector")
        .required(true)
        .args(["all", "name", "keyword"])
))]
pub struct GetArgs {
    #[arg(long, help = "Show the full shortcut list")]
    pub all: bool,

    #[arg(long, value_name = "TEXT", help = "Show shortcuts whose name contains TEXT")]
    pub name: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Show shortcuts whose key contains TEXT")]
    pub keyword: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub category: String,

    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    #[arg(long, value_parser = NonEmptyStringValueParser::new(), help = "Key chord, e.g. Ctrl+C")]
    pub key: String,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["all", "category"])
))]
pub struct DeleteArgs {
    #[arg(long, conflicts_with = "name", help = "Delete the whole shortcut list")]
    pub all: bool,

    #[arg(long, requires = "name")]
    pub category: Option<String>,

    #[arg(long, requires = "category")]
    pub name: Option<String>,
}
