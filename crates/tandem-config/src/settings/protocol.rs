use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// Transport security of the web tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plaintext
    Http,
    /// Encrypted; needs a certificate and a key
    Https,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    pub fn is_encrypted(self) -> bool {
        matches!(self, Self::Https)
    }

    /// URL scheme for request/response endpoints
    pub fn http_scheme(self) -> &'static str {
        self.as_str()
    }

    /// URL scheme for websocket channels
    pub fn ws_scheme(self) -> &'static str {
        match self {
            Self::Http => "ws",
            Self::Https => "wss",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("http") {
            Ok(Self::Http)
        } else if value.eq_ignore_ascii_case("https") {
            Ok(Self::Https)
        } else {
            Err(ConfigError::UnknownProtocol {
                value: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!(" HTTPS ".parse::<Protocol>().unwrap(), Protocol::Https);
    }

    #[test]
    fn rejects_other_schemes() {
        for value in ["ftp", "", "http2", "wss"] {
            let err = value.parse::<Protocol>().unwrap_err();
            assert!(matches!(err, ConfigError::UnknownProtocol { .. }), "{value}");
        }
    }

    #[test]
    fn websocket_scheme_follows_encryption() {
        assert_eq!(Protocol::Http.ws_scheme(), "ws");
        assert_eq!(Protocol::Https.ws_scheme(), "wss");
        assert!(!Protocol::Http.is_encrypted());
    }
}
