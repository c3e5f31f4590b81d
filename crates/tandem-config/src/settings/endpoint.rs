use std::fmt;

use serde::Serialize;

use super::{Protocol, ServiceRole};

/// Where one of the four listeners can be reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub role: ServiceRole,
    pub scheme: &'static str,
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub(crate) fn new(role: ServiceRole, protocol: Protocol, host: &str, port: u16) -> Self {
        let scheme = if role.is_channel() {
            protocol.ws_scheme()
        } else {
            protocol.http_scheme()
        };
        Self {
            role,
            scheme,
            host: host.to_string(),
            port,
        }
    }

    /// `host:port`, with IPv6 literals bracketed
    pub fn authority(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority())
    }
}
