//! The project file as a whole.
//!
//! For file discovery and layered loading, see the `discovery` module.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::BuildSource;
use crate::error::{ConfigError, Result};
use crate::settings::SettingsSource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// How the entry artifact is bundled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildSource>,

    /// Endpoints and resources for the runtime processes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsSource>,
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use tandem_config::ProjectConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let config = ProjectConfig::from_value(json!({
    ///     "build": {
    ///         "entry_points": ["src/app.js"],
    ///         "outfile": "dist/app.js"
    ///     }
    /// }))
    /// .unwrap();
    /// let build = config.build_section().unwrap();
    /// assert_eq!(build.entry_points, vec![PathBuf::from("src/app.js")]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn build_section(&self) -> Result<&BuildSource> {
        self.build
            .as_ref()
            .ok_or(ConfigError::MissingSection { section: "build" })
    }

    pub fn settings_section(&self) -> Result<&SettingsSource> {
        self.settings
            .as_ref()
            .ok_or(ConfigError::MissingSection { section: "settings" })
    }

    /// JSON Schema of the project file, for editor completion
    pub fn json_schema() -> Value {
        schemars::schema_for!(ProjectConfig).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_sections_are_reported_by_name() {
        let config = ProjectConfig::default();
        assert!(matches!(
            config.build_section(),
            Err(ConfigError::MissingSection { section: "build" })
        ));
        assert!(matches!(
            config.settings_section(),
            Err(ConfigError::MissingSection { section: "settings" })
        ));
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let result = ProjectConfig::from_value(json!({ "dev": { "port": 3000 } }));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn to_value_omits_absent_sections() {
        let value = ProjectConfig::default().to_value().unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn schema_describes_both_sections() {
        let schema = ProjectConfig::json_schema();
        let properties = &schema["properties"];
        assert!(properties.get("build").is_some());
        assert!(properties.get("settings").is_some());
    }
}
