//! Typed configuration for Tandem projects.
//!
//! A project file (`tandem.toml`, or the `tandem` field of `package.json`)
//! carries two independent sections:
//!
//! - `[build]` becomes a [`BuildDescriptor`], the single input handed to the
//!   external bundler.
//! - `[settings]` becomes a [`RuntimeSettings`] record, read at start by the
//!   web server, the hot-reload channel, the backend process and the relay.
//!
//! Both records are validated eagerly and are immutable once constructed.
//! Any problem surfaces as a [`ConfigError`] before an external tool or
//! listener is involved.
//!
//! ```no_run
//! use tandem_config::ConfigDiscovery;
//!
//! let discovery = ConfigDiscovery::new(".");
//! let settings = discovery.load_settings().unwrap();
//! println!("serving on {}", settings.endpoint(tandem_config::ServiceRole::Web));
//! ```

pub mod build;
pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod validation;

pub use build::{BuildDescriptor, BuildSource, EsTarget, Loader};
pub use config::ProjectConfig;
pub use discovery::{ConfigDiscovery, discover, discover_build, discover_settings};
pub use error::{ConfigError, Result};
pub use settings::{
    Endpoint, NamedPorts, Ports, PortsSource, Protocol, RuntimeSettings, ServiceRole,
    SettingsSource, TlsMaterial,
};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
