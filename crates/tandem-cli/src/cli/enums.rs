//! Value enums for CLI arguments.

use clap::ValueEnum;

/// How `tandem settings` prints the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SettingsFormat {
    /// Aligned key/value lines followed by the endpoint URLs
    #[default]
    Text,
    /// The record as JSON
    Json,
    /// `KEY=value` lines, ready for `export` or an env file
    Env,
}
