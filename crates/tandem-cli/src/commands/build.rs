//! Build command implementation.

use std::path::Path;

use tandem_config::BuildDescriptor;
use tracing::debug;

use crate::bundler::{BundleReport, Bundler, Esbuild};
use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the build command.
///
/// 1. Discover the project file and apply environment overrides
/// 2. Validate the `[build]` section, including entry points on disk and a
///    writable output location
/// 3. Print the bundler command line (`--dry-run`) or run the bundler
///
/// # Errors
///
/// Any configuration or bundler failure. `main` maps it to exit status 1.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let discovery = utils::discovery(&args.project)?;
    let descriptor = discovery.load_build()?;
    let bundler = Esbuild::new(&args.bundler);

    if args.dry_run {
        println!("{}", bundler.command_line(&descriptor));
        return Ok(());
    }

    let report = run(&bundler, &descriptor, discovery.root()).await?;
    ui::print_bundle_summary(&report);
    ui::success("Build complete");
    Ok(())
}

/// Run `bundler` once with a spinner on stderr
pub async fn run(
    bundler: &dyn Bundler,
    descriptor: &BuildDescriptor,
    root: &Path,
) -> Result<BundleReport> {
    let spinner = ui::Spinner::new(&format!(
        "Bundling {} with {}...",
        descriptor.output_path().display(),
        bundler.name()
    ));

    match bundler.bundle(descriptor, root).await {
        Ok(report) => {
            spinner.finish(&format!("Bundled {}", descriptor.output_path().display()));
            if !report.diagnostics.is_empty() {
                debug!(output = %report.diagnostics, "bundler diagnostics");
            }
            Ok(report)
        }
        Err(err) => {
            spinner.fail(&format!("{} failed", bundler.name()));
            Err(err.into())
        }
    }
}
