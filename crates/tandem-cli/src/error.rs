//! Error handling for the Tandem CLI.
//!
//! Commands return [`CliError`]; `main` turns it into a miette report, so
//! every failure prints one diagnostic and exits with status 1.
//!
//! # Example
//!
//! ```rust,no_run
//! use tandem_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_template(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .context("Failed to read the starter template")
//! }
//! ```

mod miette;

use std::path::PathBuf;

use tandem_config::ConfigError;
use thiserror::Error;

use crate::bundler::BundlerError;

pub use self::miette::{bundler_error_to_miette, cli_error_to_miette, config_error_to_miette};

#[derive(Debug, Error)]
pub enum CliError {
    /// Discovery, parsing or validation of the project file failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The external bundler could not be started or did not produce output
    #[error("Bundler error: {0}")]
    Bundler(#[from] BundlerError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Context helpers for results that convert into [`CliError`]
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the message
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| CliError::Custom(format!("{}: {}", msg, e.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_errors_convert() {
        let err: CliError = ConfigError::NoEntries.into();
        assert_eq!(err.to_string(), "Configuration error: no entry points specified");
    }

    #[test]
    fn bundler_errors_convert() {
        let err: CliError = BundlerError::MissingOutput {
            program: "esbuild".into(),
            path: PathBuf::from("dist/app.js"),
        }
        .into();
        assert!(err.to_string().starts_with("Bundler error:"));
        assert!(err.to_string().contains("dist/app.js"));
    }

    #[test]
    fn with_path_maps_not_found() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result.with_path("tandem.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(path) if path == PathBuf::from("tandem.toml")));
    }

    #[test]
    fn with_path_keeps_other_io_errors() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(result.with_path("x").unwrap_err(), CliError::Io(_)));
    }

    #[test]
    fn context_prefixes_message() {
        let result: Result<()> = Err(CliError::Custom("boom".into()));
        let err = result.context("writing tandem.toml").unwrap_err();
        assert_eq!(err.to_string(), "writing tandem.toml: boom");
    }
}
