use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The four listeners a Tandem project runs, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceRole {
    /// Primary web server
    Web,
    /// Hot-reload notification channel
    HotReload,
    /// Backend process
    Backend,
    /// Relay forwarding backend messages to web clients
    Relay,
}

impl ServiceRole {
    pub const ALL: [ServiceRole; 4] = [Self::Web, Self::HotReload, Self::Backend, Self::Relay];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::HotReload => "hot-reload",
            Self::Backend => "backend",
            Self::Relay => "relay",
        }
    }

    /// Key of this role in the `[settings.ports]` table
    pub fn key(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::HotReload => "hot_reload",
            Self::Backend => "backend",
            Self::Relay => "relay",
        }
    }

    /// Whether the listener speaks websocket rather than request/response
    pub fn is_channel(self) -> bool {
        matches!(self, Self::HotReload | Self::Relay)
    }
}

impl fmt::Display for ServiceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ports as written in the project file.
///
/// Either a table keyed by role or an array in role order
/// `[web, hot_reload, backend, relay]`. Values stay wide so out-of-range
/// numbers can be reported against their role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PortsSource {
    Named(NamedPorts),
    Ordered([i64; 4]),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NamedPorts {
    pub web: i64,
    #[serde(alias = "hotreload")]
    pub hot_reload: i64,
    pub backend: i64,
    pub relay: i64,
}

impl PortsSource {
    pub fn in_role_order(&self) -> [i64; 4] {
        match self {
            Self::Named(named) => [named.web, named.hot_reload, named.backend, named.relay],
            Self::Ordered(ports) => *ports,
        }
    }
}

impl From<[u16; 4]> for PortsSource {
    fn from(ports: [u16; 4]) -> Self {
        Self::Ordered(ports.map(i64::from))
    }
}

/// Validated ports: each in 1-65535, no two equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ports {
    web: u16,
    hot_reload: u16,
    backend: u16,
    relay: u16,
}

impl Ports {
    /// Check range and distinctness, reporting the first offending role.
    pub fn from_raw(raw: [i64; 4]) -> Result<Self> {
        let mut checked = [0u16; 4];
        for (slot, (role, value)) in checked.iter_mut().zip(ServiceRole::ALL.into_iter().zip(raw)) {
            *slot = match u16::try_from(value) {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::PortOutOfRange { role, value }),
            };
        }

        for (i, port) in checked.iter().enumerate() {
            if let Some(j) = checked[..i].iter().position(|other| other == port) {
                return Err(ConfigError::PortCollision {
                    first: ServiceRole::ALL[j],
                    second: ServiceRole::ALL[i],
                    port: *port,
                });
            }
        }

        let [web, hot_reload, backend, relay] = checked;
        Ok(Self {
            web,
            hot_reload,
            backend,
            relay,
        })
    }

    pub fn get(&self, role: ServiceRole) -> u16 {
        match role {
            ServiceRole::Web => self.web,
            ServiceRole::HotReload => self.hot_reload,
            ServiceRole::Backend => self.backend,
            ServiceRole::Relay => self.relay,
        }
    }

    pub fn web(&self) -> u16 {
        self.web
    }

    pub fn hot_reload(&self) -> u16 {
        self.hot_reload
    }

    pub fn backend(&self) -> u16 {
        self.backend
    }

    pub fn relay(&self) -> u16 {
        self.relay
    }

    /// Ports in role order
    pub fn as_array(&self) -> [u16; 4] {
        [self.web, self.hot_reload, self.backend, self.relay]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ServiceRole, u16)> + '_ {
        ServiceRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}
