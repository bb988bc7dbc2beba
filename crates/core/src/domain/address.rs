// Queue server address

use std::fmt;
use std::str::FromStr;

use super::error::{DomainError, Result};

/// Host and port of the beanstalkd server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    pub host: String,
    pub port: u16,
}

impl ServerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Parses the combined `host:port` form (`[v6addr]:port` for IPv6 literals)
impl FromStr for ServerAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| DomainError::InvalidAddress(s.to_string()))?;

        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        if host.is_empty() {
            return Err(DomainError::InvalidAddress(s.to_string()));
        }

        let port = port
            .parse::<u16>()
            .map_err(|_| DomainError::InvalidPort(port.to_string()))?;

        Ok(Self::new(host, port))
    }
}
