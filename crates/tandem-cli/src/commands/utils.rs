//! Helpers shared by the commands.

use std::path::{Path, PathBuf};

use tandem_config::ConfigDiscovery;

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {e}"),
        ))
    })
}

/// `--cwd` resolved against the process directory, or the process directory
pub fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = get_cwd()?;
    Ok(match cwd {
        Some(dir) => resolve_path(dir, &current),
        None => current,
    })
}

/// Discovery rooted at the project, honoring `--config`
pub fn discovery(args: &ProjectArgs) -> Result<ConfigDiscovery> {
    let discovery = ConfigDiscovery::new(project_root(args.cwd.as_deref())?);
    Ok(match &args.config {
        Some(file) => discovery.with_file(file),
        None => discovery,
    })
}
