//! Init command implementation.

use tandem_config::discovery::CONFIG_FILE;

use crate::cli::InitArgs;
use crate::commands::{templates, utils};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Write a starter `tandem.toml` into the project root.
///
/// # Errors
///
/// Refuses to replace an existing file unless `--force` is given.
pub async fn execute(args: InitArgs) -> Result<()> {
    let root = utils::project_root(args.cwd.as_deref())?;
    let path = root.join(CONFIG_FILE);

    if path.exists() && !args.force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists (pass --force to overwrite it)",
            path.display()
        )));
    }

    tokio::fs::write(&path, templates::TANDEM_TOML)
        .await
        .with_path(&path)
        .context(format!("Failed to write {}", path.display()))?;

    ui::success(&format!("Created {}", path.display()));
    print_next_steps();
    Ok(())
}

fn print_next_steps() {
    ui::detail("");
    ui::detail("Next steps:");
    ui::detail("  1. Create src/app.js, src/index.html and src/other/404.html");
    ui::detail("  2. tandem check");
    ui::detail("  3. tandem build");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_starter_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            cwd: Some(dir.path().to_path_buf()),
            force: false,
        };
        execute(args).await.unwrap();
        let written = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(written, templates::TANDEM_TOML);
    }

    #[tokio::test]
    async fn keeps_existing_file_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        let err = execute(InitArgs {
            cwd: Some(dir.path().to_path_buf()),
            force: false,
        })
        .await
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        execute(InitArgs {
            cwd: Some(dir.path().to_path_buf()),
            force: true,
        })
        .await
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), templates::TANDEM_TOML);
    }
}
