//! Runtime settings shared by the web server, hot-reload channel, backend
//! process and relay.
//!
//! The record is loaded once at process start and passed explicitly to each
//! consumer. It never opens sockets or starts anything itself.

mod endpoint;
mod ports;
mod protocol;

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::validation::{self, ConfigValidator, FsValidator};

pub use endpoint::Endpoint;
pub use ports::{NamedPorts, Ports, PortsSource, ServiceRole};
pub use protocol::Protocol;

/// `[settings]` section as written in the project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SettingsSource {
    /// Ask consumers for verbose diagnostics
    #[serde(default)]
    pub debug: bool,

    /// `http` or `https`
    pub protocol: String,

    /// Hostname or IP address all listeners bind to
    pub host: String,

    pub ports: PortsSource,

    /// Page served at `/`
    #[serde(alias = "startpage")]
    pub start_page: PathBuf,

    /// Page served for unknown routes
    #[serde(alias = "errpage")]
    pub error_page: PathBuf,

    /// Certificate, required with `https`
    #[serde(default, alias = "certpath", skip_serializing_if = "Option::is_none")]
    pub cert_path: Option<PathBuf>,

    /// Private key, required with `https`
    #[serde(default, alias = "keypath", skip_serializing_if = "Option::is_none")]
    pub key_path: Option<PathBuf>,

    /// Mode the backend process runs in. When set it must be `true` exactly
    /// when `protocol` is `https`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_production: Option<bool>,
}

/// Certificate and key for the encrypted protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsMaterial {
    cert: PathBuf,
    key: PathBuf,
}

impl TlsMaterial {
    pub fn cert(&self) -> &Path {
        &self.cert
    }

    pub fn key(&self) -> &Path {
        &self.key
    }
}

/// Validated, immutable runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeSettings {
    debug: bool,
    protocol: Protocol,
    host: String,
    ports: Ports,
    start_page: PathBuf,
    error_page: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    tls: Option<TlsMaterial>,
    backend_production: bool,
}

impl RuntimeSettings {
    /// Validate `source` against the project at `root` and build the record.
    ///
    /// Checks run in a fixed order: protocol, TLS material, host and ports,
    /// then the start and error pages.
    pub fn load(source: &SettingsSource, root: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(source, &FsValidator::new(root))
    }

    pub fn load_with<V>(source: &SettingsSource, validator: &V) -> Result<Self>
    where
        V: ConfigValidator<SettingsSource> + ?Sized,
    {
        validator.validate(source)?;

        let protocol: Protocol = source.protocol.parse()?;
        let ports = Ports::from_raw(source.ports.in_role_order())?;

        let cert = validation::non_empty(source.cert_path.as_deref());
        let key = validation::non_empty(source.key_path.as_deref());
        let tls = if protocol.is_encrypted() {
            match (cert, key) {
                (Some(cert), Some(key)) => Some(TlsMaterial {
                    cert: cert.to_path_buf(),
                    key: key.to_path_buf(),
                }),
                _ => return Err(validation::missing_tls(cert, key)),
            }
        } else {
            if cert.is_some() || key.is_some() {
                debug!("protocol is http, ignoring cert_path/key_path");
            }
            None
        };

        let backend_production = match source.backend_production {
            Some(production) => production,
            None => {
                warn!(
                    protocol = %protocol,
                    "backend_production not set; make sure the backend runs in {} mode",
                    if protocol.is_encrypted() { "production" } else { "development" }
                );
                protocol.is_encrypted()
            }
        };

        let settings = Self {
            debug: source.debug,
            protocol,
            host: source.host.trim().to_string(),
            ports,
            start_page: source.start_page.clone(),
            error_page: source.error_page.clone(),
            tls,
            backend_production,
        };

        info!(
            protocol = %settings.protocol,
            host = %settings.host,
            ports = ?settings.ports.as_array(),
            "runtime settings loaded"
        );

        Ok(settings)
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn ports(&self) -> &Ports {
        &self.ports
    }

    pub fn start_page(&self) -> &Path {
        &self.start_page
    }

    pub fn error_page(&self) -> &Path {
        &self.error_page
    }

    /// Present exactly when the protocol is `https`
    pub fn tls(&self) -> Option<&TlsMaterial> {
        self.tls.as_ref()
    }

    /// Whether the backend process should run in production mode
    pub fn backend_production(&self) -> bool {
        self.backend_production
    }

    pub fn endpoint(&self, role: ServiceRole) -> Endpoint {
        Endpoint::new(role, self.protocol, &self.host, self.ports.get(role))
    }

    /// All four endpoints in role order
    pub fn endpoints(&self) -> Vec<Endpoint> {
        ServiceRole::ALL
            .into_iter()
            .map(|role| self.endpoint(role))
            .collect()
    }

    /// Environment variables describing this record, for external processes
    ///
    /// # Example
    ///
    /// ```
    /// use tandem_config::{RuntimeSettings, SchemaValidator, SettingsSource};
    ///
    /// let source = SettingsSource {
    ///     debug: false,
    ///     protocol: "http".into(),
    ///     host: "localhost".into(),
    ///     ports: [8000, 5000, 7000, 7001].into(),
    ///     start_page: "src/index.html".into(),
    ///     error_page: "src/other/404.html".into(),
    ///     cert_path: None,
    ///     key_path: None,
    ///     backend_production: Some(false),
    /// };
    /// let settings = RuntimeSettings::load_with(&source, &SchemaValidator).unwrap();
    /// let env = settings.to_env();
    /// assert!(env.contains(&("TANDEM_WEB_PORT".to_string(), "8000".to_string())));
    /// ```
    pub fn to_env(&self) -> Vec<(String, String)> {
        let mut vars = vec![
            ("TANDEM_DEBUG".to_string(), self.debug.to_string()),
            ("TANDEM_PROTOCOL".to_string(), self.protocol.to_string()),
            ("TANDEM_HOST".to_string(), self.host.clone()),
        ];
        for (role, port) in self.ports.iter() {
            vars.push((
                format!("TANDEM_{}_PORT", role.key().to_ascii_uppercase()),
                port.to_string(),
            ));
        }
        vars.push((
            "TANDEM_START_PAGE".to_string(),
            self.start_page.display().to_string(),
        ));
        vars.push((
            "TANDEM_ERROR_PAGE".to_string(),
            self.error_page.display().to_string(),
        ));
        if let Some(tls) = &self.tls {
            vars.push(("TANDEM_CERT_PATH".to_string(), tls.cert.display().to_string()));
            vars.push(("TANDEM_KEY_PATH".to_string(), tls.key.display().to_string()));
        }
        vars.push((
            "TANDEM_BACKEND_PRODUCTION".to_string(),
            self.backend_production.to_string(),
        ));
        vars
    }
}
