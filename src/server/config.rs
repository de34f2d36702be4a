use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 4000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            bind_addr: SocketAddr::new(host, port),
        }
    }
}

impl Default for ServerConfig {
    // All interfaces, so the service is reachable from outside a container.
    fn default() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:4000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn explicit_host_and_port() {
        let c = ServerConfig::new("127.0.0.1".parse().unwrap(), 8080);
        assert_eq!(c.bind_addr.port(), 8080);
        assert!(c.bind_addr.ip().is_loopback());
    }
}
