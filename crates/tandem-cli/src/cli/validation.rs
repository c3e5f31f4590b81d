//! Value parsers for CLI arguments.

use std::path::PathBuf;

/// Accept only an existing directory.
///
/// # Errors
///
/// Returns an error message if the path does not exist or is not a directory.
pub fn parse_dir(s: &str) -> Result<PathBuf, String> {
    if s.trim().is_empty() {
        return Err("Directory cannot be empty".to_string());
    }

    let path = PathBuf::from(s);
    if !path.exists() {
        return Err(format!("Directory does not exist: '{s}'"));
    }
    if !path.is_dir() {
        return Err(format!("Not a directory: '{s}'"));
    }
    Ok(path)
}
