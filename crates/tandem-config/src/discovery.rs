//! File-based config discovery for CLI use
//!
//! Finds the project file, layers environment overrides on top of it with
//! figment, and hands each section to its loader.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Toml};
use tracing::debug;

use crate::build::BuildDescriptor;
use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::settings::RuntimeSettings;

pub const CONFIG_FILE: &str = "tandem.toml";
pub const PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_FIELD: &str = "tandem";
pub const ENV_PREFIX: &str = "TANDEM_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use tandem_config::ConfigDiscovery;
///
/// let descriptor = ConfigDiscovery::new(".").load_build().unwrap();
/// println!("bundling into {}", descriptor.output_path().display());
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    file: Option<PathBuf>,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
        }
    }

    /// Use this file instead of searching (relative paths resolve against the root)
    pub fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = Some(self.root.join(file));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. the file given to [`with_file`](Self::with_file)
    /// 2. `tandem.toml`
    /// 3. `package.json` with a `tandem` field
    pub fn find(&self) -> Option<PathBuf> {
        if let Some(file) = &self.file {
            return Some(file.clone());
        }

        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if pkg_path.is_file() && Figment::from(Json::file(&pkg_path)).contains(PACKAGE_FIELD) {
            return Some(pkg_path);
        }

        None
    }

    /// Load the whole project file, with environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            path: self.root.clone(),
        })?;
        self.load_from(&path)
    }

    /// Load and validate the `[build]` section
    pub fn load_build(&self) -> Result<BuildDescriptor> {
        let config = self.load()?;
        BuildDescriptor::load(config.build_section()?, &self.root)
    }

    /// Load and validate the `[settings]` section
    pub fn load_settings(&self) -> Result<RuntimeSettings> {
        let config = self.load()?;
        RuntimeSettings::load(config.settings_section()?, &self.root)
    }

    fn load_from(&self, path: &Path) -> Result<ProjectConfig> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "loading config");

        let base = if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
            let package = Figment::from(Json::file(path));
            package.find_value(PACKAGE_FIELD)?;
            package.focus(PACKAGE_FIELD)
        } else {
            Figment::from(Toml::file(path))
        };

        let config: ProjectConfig = base.merge(env_overrides()).extract()?;
        Ok(config)
    }
}

/// `TANDEM_BUILD__<KEY>` and `TANDEM_SETTINGS__<KEY>`; `__` separates nesting levels
fn env_overrides() -> Env {
    Env::prefixed(ENV_PREFIX)
        .filter(|key| {
            let key = key.as_str().to_ascii_lowercase();
            key.starts_with("build__") || key.starts_with("settings__")
        })
        .split("__")
}

/// Discover and load config from the current directory (convenience function)
pub fn discover() -> Result<ProjectConfig> {
    ConfigDiscovery::new(std::env::current_dir()?).load()
}

/// Discover config in the current directory and load the build descriptor
pub fn discover_build() -> Result<BuildDescriptor> {
    ConfigDiscovery::new(std::env::current_dir()?).load_build()
}

/// Discover config in the current directory and load the runtime settings
pub fn discover_settings() -> Result<RuntimeSettings> {
    ConfigDiscovery::new(std::env::current_dir()?).load_settings()
}
