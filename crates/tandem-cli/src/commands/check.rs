//! Check command implementation.
//!
//! Runs every validation, filesystem checks included, without building.

use tandem_config::{BuildDescriptor, RuntimeSettings};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// The project file is read once; each requested section is then validated
/// against the project root. The first failing check ends the command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let discovery = utils::discovery(&args.project)?;
    let config = discovery.load()?;

    if !args.settings_only {
        ui::info("Checking [build]...");
        let descriptor = BuildDescriptor::load(config.build_section()?, discovery.root())?;
        ui::success(&format!(
            "{} entry point(s) -> {} ({})",
            descriptor.entry_points().len(),
            descriptor.output_path().display(),
            descriptor.target()
        ));
    }

    if !args.build_only {
        ui::info("Checking [settings]...");
        let settings = RuntimeSettings::load(config.settings_section()?, discovery.root())?;
        ui::success(&format!(
            "{} on {}, backend in {} mode",
            settings.protocol(),
            settings.host(),
            if settings.backend_production() {
                "production"
            } else {
                "development"
            }
        ));
        for line in endpoint_lines(&settings) {
            ui::detail(&line);
        }
    }

    ui::success("Configuration is valid");
    Ok(())
}

fn endpoint_lines(settings: &RuntimeSettings) -> Vec<String> {
    settings
        .endpoints()
        .iter()
        .map(|endpoint| format!("  {:<11}{}", endpoint.role.as_str(), endpoint))
        .collect()
}
