//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::enums::SettingsFormat;
use super::validation::parse_dir;
use crate::bundler::DEFAULT_BUNDLER;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the build descriptor and run the bundler
    ///
    /// Exits with status 1 if the descriptor is invalid or the bundler fails.
    Build(BuildArgs),

    /// Validate the build descriptor and runtime settings
    ///
    /// Runs every check, including file existence and permissions, and lists
    /// the endpoints the runtime processes will use.
    Check(CheckArgs),

    /// Print the resolved runtime settings
    ///
    /// Environment overrides (TANDEM_SETTINGS__*) are applied before printing.
    Settings(SettingsArgs),

    /// Write a starter tandem.toml
    Init(InitArgs),

    /// Print the JSON Schema of tandem.toml
    Schema,
}

/// Where to find the project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root; relative paths in the config resolve against it
    #[arg(long, value_name = "DIR", value_parser = parse_dir)]
    pub cwd: Option<PathBuf>,

    /// Config file to use instead of searching for tandem.toml or package.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Bundler executable, called with an esbuild-compatible command line
    #[arg(long, value_name = "PROGRAM", env = "TANDEM_BUNDLER", default_value = DEFAULT_BUNDLER)]
    pub bundler: PathBuf,

    /// Print the bundler command line instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only check the [build] section
    #[arg(long, conflicts_with = "settings_only")]
    pub build_only: bool,

    /// Only check the [settings] section
    #[arg(long)]
    pub settings_only: bool,
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = SettingsFormat::Text)]
    pub format: SettingsFormat,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create tandem.toml in
    #[arg(long, value_name = "DIR", value_parser = parse_dir)]
    pub cwd: Option<PathBuf>,

    /// Overwrite an existing tandem.toml
    #[arg(long)]
    pub force: bool,
}
