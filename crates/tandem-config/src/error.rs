//! Error types for configuration discovery, loading and validation.
//!
//! Every variant is a configuration error: it is detected at load time,
//! before any external tool or listener is involved, and it needs a human to
//! fix the configuration. Nothing here is retried.

use std::path::PathBuf;

use figment::error::Kind;
use thiserror::Error;

use crate::settings::{Protocol, ServiceRole};

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Discovery and parsing
    #[error("config not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("missing [{section}] section in config")]
    MissingSection { section: &'static str },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    // Build descriptor
    #[error("no entry points specified")]
    NoEntries,

    #[error("entry point not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("invalid loader extension '{extension}': expected a dot followed by a name, e.g. '.html'")]
    InvalidLoaderExtension { extension: String },

    #[error("output path is not writable: {} ({reason})", .path.display())]
    OutputNotWritable { path: PathBuf, reason: String },

    // Runtime settings
    #[error("unknown protocol '{value}': expected 'http' or 'https'")]
    UnknownProtocol { value: String },

    #[error("protocol 'https' requires cert_path and key_path; missing: {}", .fields.join(", "))]
    MissingTlsMaterial { fields: Vec<&'static str> },

    #[error("{field} is not readable: {} ({reason})", .path.display())]
    TlsFileUnreadable {
        field: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("invalid host '{value}': {reason}")]
    InvalidHost { value: String, reason: &'static str },

    #[error("port for '{role}' is out of range: {value} (expected 1-65535)")]
    PortOutOfRange { role: ServiceRole, value: i64 },

    #[error("port collision: '{first}' and '{second}' both use port {port}")]
    PortCollision {
        first: ServiceRole,
        second: ServiceRole,
        port: u16,
    },

    #[error("{field} not found: {}", .path.display())]
    PageNotFound { field: &'static str, path: PathBuf },

    #[error(
        "backend_production = {production} does not match protocol '{protocol}' \
         (the backend runs in production mode exactly when the web tier uses https)"
    )]
    BackendModeMismatch { protocol: Protocol, production: bool },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Dotted name of the configuration field the error is about, if any.
    pub fn field(&self) -> Option<String> {
        let field = match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => field.clone(),
            Self::MissingSection { section } => (*section).to_string(),
            Self::NoEntries | Self::EntryNotFound { .. } => "build.entry_points".to_string(),
            Self::InvalidLoaderExtension { extension } => format!("build.loaders.{extension}"),
            Self::OutputNotWritable { .. } => "build.outfile".to_string(),
            Self::UnknownProtocol { .. } | Self::BackendModeMismatch { .. } => {
                "settings.protocol".to_string()
            }
            Self::MissingTlsMaterial { fields } => fields
                .iter()
                .map(|field| format!("settings.{field}"))
                .collect::<Vec<_>>()
                .join(", "),
            Self::TlsFileUnreadable { field, .. } | Self::PageNotFound { field, .. } => {
                format!("settings.{field}")
            }
            Self::InvalidHost { .. } => "settings.host".to_string(),
            Self::PortOutOfRange { role, .. } | Self::PortCollision { second: role, .. } => {
                format!("settings.ports.{}", role.key())
            }
            Self::NotFound { .. } | Self::Io(_) => return None,
        };
        Some(field)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        let mut path = err.path.clone();
        match &err.kind {
            Kind::MissingField(name) => {
                if path.last().map(String::as_str) != Some(name.as_ref()) {
                    path.push(name.to_string());
                }
                ConfigError::MissingField {
                    field: path.join("."),
                }
            }
            _ => ConfigError::InvalidValue {
                field: if path.is_empty() {
                    "config".to_string()
                } else {
                    path.join(".")
                },
                message: err.kind.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidValue {
            field: "config".to_string(),
            message: err.to_string(),
        }
    }
}
