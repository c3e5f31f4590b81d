//! External bundler integration.
//!
//! The descriptor is the whole contract: a [`Bundler`] receives a validated
//! [`BuildDescriptor`] and the project root, writes exactly one output
//! artifact, and reports where it went. No JavaScript is parsed or
//! transformed in this process.

mod esbuild;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tandem_config::BuildDescriptor;
use thiserror::Error;

pub use esbuild::Esbuild;

/// Program used when neither `--bundler` nor `TANDEM_BUNDLER` is given
pub const DEFAULT_BUNDLER: &str = "esbuild";

#[async_trait]
pub trait Bundler: Send + Sync {
    /// Short name for messages
    fn name(&self) -> &str;

    /// Run one build. Paths in `descriptor` are relative to `root`.
    async fn bundle(
        &self,
        descriptor: &BuildDescriptor,
        root: &Path,
    ) -> Result<BundleReport, BundlerError>;
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct BundleReport {
    pub output: PathBuf,
    pub size: u64,
    pub duration: Duration,
    /// Whatever the bundler printed on stderr (warnings, timing)
    pub diagnostics: String,
}

#[derive(Debug, Error)]
pub enum BundlerError {
    #[error("failed to start bundler '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("bundler '{program}' failed ({})", status_label(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("bundler '{program}' reported success but {} was not written", .path.display())]
    MissingOutput { program: String, path: PathBuf },
}

fn status_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
