//! Miette reports for CLI errors.

use miette::Report;
use tandem_config::ConfigError;

use crate::bundler::BundlerError;
use crate::error::CliError;

pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Bundler(e) => bundler_error_to_miette(e),
        CliError::InvalidArgument(_) => miette::miette!(code = "tandem::usage", "{}", err),
        _ => miette::miette!("{}", err),
    }
}

/// Name the offending field (and how to override it) when there is one
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match (&err, err.field()) {
        (ConfigError::NotFound { .. }, _) => miette::miette!(
            code = "tandem::config",
            help = "Run 'tandem init' to create tandem.toml, or pass --config <path>",
            "Configuration error: {}",
            err
        ),
        (_, Some(field)) if field.starts_with("build") || field.starts_with("settings") => {
            miette::miette!(
                code = "tandem::config",
                help = format!(
                    "Fix {field} in the project file, or override it with {}",
                    env_override(&field)
                ),
                "Configuration error: {}",
                err
            )
        }
        (_, Some(_) | None) => {
            miette::miette!(code = "tandem::config", "Configuration error: {}", err)
        }
    }
}

pub fn bundler_error_to_miette(err: BundlerError) -> Report {
    match &err {
        BundlerError::Spawn { .. } => miette::miette!(
            code = "tandem::bundler",
            help = "Install esbuild (npm install --save-dev esbuild) or point --bundler / TANDEM_BUNDLER at it",
            "{}",
            err
        ),
        BundlerError::Failed { stderr, .. } if !stderr.is_empty() => {
            miette::miette!(code = "tandem::bundler", "{}\n\n{}", err, stderr)
        }
        _ => miette::miette!(code = "tandem::bundler", "{}", err),
    }
}

/// `settings.ports.web` -> `TANDEM_SETTINGS__PORTS__WEB`
fn env_override(fields: &str) -> String {
    fields
        .split(", ")
        .map(|field| format!("TANDEM_{}", field.replace('.', "__").to_ascii_uppercase()))
        .collect::<Vec<_>>()
        .join(" / ")
}
