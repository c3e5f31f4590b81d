//! Schema command implementation.

use tandem_config::ProjectConfig;

use crate::error::Result;

/// Print the JSON Schema of the project file to stdout
pub fn execute() -> Result<()> {
    let schema = ProjectConfig::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
