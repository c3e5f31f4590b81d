//! Pluggable config validation strategies
//!
//! Separates structural validation (for library use, no filesystem access)
//! from filesystem validation (for CLI use).

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::build::BuildSource;
use crate::error::{ConfigError, Result};
use crate::settings::{Ports, Protocol, SettingsSource};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator<T: ?Sized> {
    fn validate(&self, source: &T) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this when the referenced files live somewhere else, e.g. when a
/// descriptor is prepared on one machine and built on another.
///
/// # Example
///
/// ```
/// use tandem_config::{BuildSource, ConfigValidator, SchemaValidator};
///
/// let source = BuildSource::new("src/app.js", "dist/app.js");
/// SchemaValidator.validate(&source).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator<BuildSource> for SchemaValidator {
    fn validate(&self, source: &BuildSource) -> Result<()> {
        check_build(source, None)
    }
}

impl ConfigValidator<SettingsSource> for SchemaValidator {
    fn validate(&self, source: &SettingsSource) -> Result<()> {
        check_settings(source, None)
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks plus existence and permission checks on every
/// referenced path. Relative paths are resolved against `root`.
///
/// # Example
///
/// ```no_run
/// use tandem_config::{BuildSource, ConfigValidator, FsValidator};
///
/// let source = BuildSource::new("src/app.js", "dist/app.js");
/// FsValidator::new(".").validate(&source).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ConfigValidator<BuildSource> for FsValidator {
    fn validate(&self, source: &BuildSource) -> Result<()> {
        check_build(source, Some(&self.root))
    }
}

impl ConfigValidator<SettingsSource> for FsValidator {
    fn validate(&self, source: &SettingsSource) -> Result<()> {
        check_settings(source, Some(&self.root))
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema<T>(source: &T) -> Result<()>
where
    SchemaValidator: ConfigValidator<T>,
{
    SchemaValidator.validate(source)
}

/// Convenience function for filesystem validation
pub fn validate_fs<T>(source: &T, root: impl AsRef<Path>) -> Result<()>
where
    FsValidator: ConfigValidator<T>,
{
    FsValidator::new(root).validate(source)
}

fn check_build(source: &BuildSource, root: Option<&Path>) -> Result<()> {
    if source.entry_points.is_empty() {
        return Err(ConfigError::NoEntries);
    }

    for extension in source.loaders.keys() {
        check_extension(extension)?;
    }

    if source.output_path.as_os_str().is_empty() {
        return Err(ConfigError::MissingField {
            field: "build.outfile".to_string(),
        });
    }

    let Some(root) = root else {
        return Ok(());
    };

    for entry in &source.entry_points {
        let path = root.join(entry);
        if !path.is_file() {
            return Err(ConfigError::EntryNotFound { path });
        }
        debug!(entry = %path.display(), "entry point exists");
    }

    check_output_writable(&root.join(&source.output_path))
}

fn check_extension(extension: &str) -> Result<()> {
    let name = extension.strip_prefix('.').unwrap_or_default();
    let well_formed = !name.is_empty()
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_whitespace);
    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidLoaderExtension {
            extension: extension.to_string(),
        })
    }
}

/// The bundler creates missing parent directories, so the nearest existing
/// ancestor is the one that has to accept writes. Permission bits alone do
/// not say whether this process may write there (ownership, ACLs, root), so
/// a throwaway file is created and removed.
fn check_output_writable(path: &Path) -> Result<()> {
    let not_writable = |reason: &str| ConfigError::OutputNotWritable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if path.is_dir() {
        return Err(not_writable("output path is a directory"));
    }

    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let existing = parent
        .ancestors()
        .find(|ancestor| !ancestor.as_os_str().is_empty() && ancestor.exists())
        .unwrap_or(Path::new("."));

    let metadata = fs::metadata(existing).map_err(|err| not_writable(&err.to_string()))?;
    if !metadata.is_dir() {
        return Err(not_writable(&format!(
            "{} is not a directory",
            existing.display()
        )));
    }

    tempfile::Builder::new()
        .prefix(".tandem-write-check")
        .tempfile_in(existing)
        .map_err(|err| {
            not_writable(&format!(
                "cannot create files in {}: {err}",
                existing.display()
            ))
        })?;

    debug!(dir = %existing.display(), "output directory is writable");
    Ok(())
}

fn check_settings(source: &SettingsSource, root: Option<&Path>) -> Result<()> {
    let protocol: Protocol = source.protocol.parse()?;
    debug!(%protocol, "protocol recognized");

    if protocol.is_encrypted() {
        let cert = non_empty(source.cert_path.as_deref());
        let key = non_empty(source.key_path.as_deref());
        let (Some(cert), Some(key)) = (cert, key) else {
            return Err(missing_tls(cert, key));
        };
        if let Some(root) = root {
            check_readable(root, "cert_path", cert)?;
            check_readable(root, "key_path", key)?;
        }
    }

    check_host(&source.host)?;
    let ports = Ports::from_raw(source.ports.in_role_order())?;
    debug!(ports = ?ports.as_array(), "ports valid");

    check_page("start_page", &source.start_page, root)?;
    check_page("error_page", &source.error_page, root)?;

    if let Some(production) = source.backend_production {
        if production != protocol.is_encrypted() {
            return Err(ConfigError::BackendModeMismatch {
                protocol,
                production,
            });
        }
    }

    Ok(())
}

pub(crate) fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|path| !path.as_os_str().is_empty())
}

pub(crate) fn missing_tls(cert: Option<&Path>, key: Option<&Path>) -> ConfigError {
    let mut fields = Vec::new();
    if cert.is_none() {
        fields.push("cert_path");
    }
    if key.is_none() {
        fields.push("key_path");
    }
    ConfigError::MissingTlsMaterial { fields }
}

fn check_readable(root: &Path, field: &'static str, path: &Path) -> Result<()> {
    let path = root.join(path);
    let unreadable = |reason: String| ConfigError::TlsFileUnreadable {
        field,
        path: path.clone(),
        reason,
    };

    if !path.is_file() {
        return Err(unreadable("not a file".to_string()));
    }
    File::open(&path).map_err(|err| unreadable(err.to_string()))?;
    Ok(())
}

fn check_host(host: &str) -> Result<()> {
    let invalid = |reason| ConfigError::InvalidHost {
        value: host.to_string(),
        reason,
    };

    let trimmed = host.trim();
    if trimmed.is_empty() {
        return Err(invalid("host cannot be empty"));
    }
    if trimmed.contains("://") {
        return Err(invalid("give a bare host name, without a scheme"));
    }
    if trimmed.contains(['/', '?', '#']) || trimmed.chars().any(char::is_whitespace) {
        return Err(invalid("host cannot contain paths or whitespace"));
    }
    Ok(())
}

fn check_page(field: &'static str, page: &Path, root: Option<&Path>) -> Result<()> {
    if page.as_os_str().is_empty() {
        return Err(ConfigError::MissingField {
            field: format!("settings.{field}"),
        });
    }

    if let Some(root) = root {
        let path = root.join(page);
        if !path.is_file() {
            return Err(ConfigError::PageNotFound { field, path });
        }
    }
    Ok(())
}
