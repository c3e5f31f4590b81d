//! Settings command implementation.
//!
//! Prints the validated runtime settings for the processes that consume
//! them. Output goes to stdout; nothing else is written there.

use std::fmt::Write as _;

use tandem_config::RuntimeSettings;

use crate::cli::{SettingsArgs, SettingsFormat};
use crate::commands::utils;
use crate::error::Result;

pub fn execute(args: SettingsArgs) -> Result<()> {
    let settings = utils::discovery(&args.project)?.load_settings()?;
    print!("{}", render(&settings, args.format)?);
    Ok(())
}

/// Render `settings` in `format`, newline-terminated
pub fn render(settings: &RuntimeSettings, format: SettingsFormat) -> Result<String> {
    Ok(match format {
        SettingsFormat::Text => render_text(settings),
        SettingsFormat::Json => serde_json::to_string_pretty(settings)? + "\n",
        SettingsFormat::Env => settings
            .to_env()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect(),
    })
}

fn render_text(settings: &RuntimeSettings) -> String {
    let mut rows = vec![
        ("debug", settings.debug().to_string()),
        ("protocol", settings.protocol().to_string()),
        ("host", settings.host().to_string()),
        ("start_page", settings.start_page().display().to_string()),
        ("error_page", settings.error_page().display().to_string()),
    ];
    if let Some(tls) = settings.tls() {
        rows.push(("cert_path", tls.cert().display().to_string()));
        rows.push(("key_path", tls.key().display().to_string()));
    }
    rows.push((
        "backend_production",
        settings.backend_production().to_string(),
    ));

    let mut out = String::new();
    for (key, value) in rows {
        let _ = writeln!(out, "{key:<20}{value}");
    }
    out.push('\n');
    for endpoint in settings.endpoints() {
        let _ = writeln!(out, "{:<20}{}", endpoint.role.as_str(), endpoint);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_config::{SchemaValidator, SettingsSource};

    fn settings() -> RuntimeSettings {
        let source = SettingsSource {
            debug: false,
            protocol: "http".into(),
            host: "localhost".into(),
            ports: [8000, 5000, 7000, 7001].into(),
            start_page: "src/index.html".into(),
            error_page: "src/other/404.html".into(),
            cert_path: None,
            key_path: None,
            backend_production: Some(false),
        };
        RuntimeSettings::load_with(&source, &SchemaValidator).unwrap()
    }

    #[test]
    fn text_lists_values_then_endpoints() {
        let text = render(&settings(), SettingsFormat::Text).unwrap();
        assert!(text.starts_with("debug               false\n"));
        assert!(text.contains("host                localhost\n"));
        assert!(text.contains("hot-reload          ws://localhost:5000\n"));
        assert!(!text.contains("cert_path"));
    }

    #[test]
    fn json_round_trips_through_serde_json() {
        let json = render(&settings(), SettingsFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["protocol"], "http");
        assert_eq!(value["ports"]["hot_reload"], 5000);
        assert!(value.get("tls").is_none());
    }

    #[test]
    fn env_is_one_assignment_per_line() {
        let env = render(&settings(), SettingsFormat::Env).unwrap();
        assert!(env.lines().all(|line| line.starts_with("TANDEM_") && line.contains('=')));
        assert!(env.contains("TANDEM_RELAY_PORT=7001\n"));
    }
}
