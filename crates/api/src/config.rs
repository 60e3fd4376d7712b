//! Server configuration.
//!
//! Everything is fixed at compile time; there is no config file and no
//! environment lookup (only `RUST_LOG`, read by the tracing setup).

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_on_all_interfaces_port_8000() {
        assert_eq!(ServerConfig::default().bind_addr.to_string(), "0.0.0.0:8000");
    }
}
