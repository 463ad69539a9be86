//! Listener settings, embedded in the `http` section of the config file.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface or hostname to bind (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port (default: 5005)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5005
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults, listening on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` as configured, for logs
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve to the first matching socket address. Hostnames such as
    /// `localhost` go through the system resolver.
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("no address for {}", self.bind_address()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:5005");
        assert_eq!(config.socket_addr().unwrap().port(), 5005);
    }

    #[test]
    fn test_with_port() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_garbage_host_fails_to_resolve() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            port: 1,
        };
        assert!(config.socket_addr().is_err());
    }
}
