//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `tandem build` - validate the build descriptor and run the bundler
//! - `tandem check` - validate the build descriptor and runtime settings
//! - `tandem settings` - print the resolved runtime settings
//! - `tandem init` - write a starter `tandem.toml`
//! - `tandem schema` - print the JSON Schema of the project file

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command, InitArgs, ProjectArgs, SettingsArgs};
pub use enums::*;
pub use validation::parse_dir;

/// Tandem - one validated config for the bundler and the runtime processes
#[derive(Parser, Debug)]
#[command(
    name = "tandem",
    version,
    about = "Validate project config, export runtime settings and drive the bundler",
    long_about = "Tandem reads tandem.toml (or the \"tandem\" field of package.json),\n\
                  validates the [build] descriptor and the [settings] for the web server,\n\
                  hot-reload channel, backend and relay, and hands the descriptor to an\n\
                  external bundler such as esbuild."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every validation step and the exact bundler command line.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status output; errors and command results still print
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
