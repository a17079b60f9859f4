//! Peer network addresses
//!
//! Addresses are held in the 16-byte IPv6 form used on the wire; IPv4 peers
//! use the `::ffff:a.b.c.d` mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Service bit for a node serving the full block chain
pub const NODE_NETWORK: u64 = 1;

const IPV4_MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// 16-byte address plus port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetAddress {
    pub ip: [u8; 16],
    pub port: u16,
}

impl NetAddress {
    pub fn new(ip: [u8; 16], port: u16) -> Self {
        Self { ip, port }
    }

    /// Whether this is an IPv4-mapped address
    pub fn is_ipv4(&self) -> bool {
        self.ip[..12] == IPV4_MAPPED_PREFIX
    }

    pub fn ip_addr(&self) -> IpAddr {
        if self.is_ipv4() {
            IpAddr::V4(Ipv4Addr::new(self.ip[12], self.ip[13], self.ip[14], self.ip[15]))
        } else {
            IpAddr::V6(Ipv6Addr::from(self.ip))
        }
    }

    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip_addr(), self.port)
    }
}

impl From<SocketAddr> for NetAddress {
    fn from(addr: SocketAddr) -> Self {
        let ip = match addr.ip() {
            IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
            IpAddr::V6(v6) => v6.octets(),
        };
        NetAddress::new(ip, addr.port())
    }
}

impl fmt::Display for NetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_socket_addr())
    }
}

/// Bootstrap peer with a synthetic last-seen time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: NetAddress,
    pub services: u64,
    /// Unix timestamp
    pub last_seen: u64,
}

impl SeedAddress {
    pub fn socket_addr(&self) -> SocketAddr {
        self.addr.to_socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_mapped_becomes_v4() {
        let addr: SocketAddr = "203.0.113.7:17140".parse().unwrap();
        let net = NetAddress::from(addr);
        assert!(net.is_ipv4());
        assert_eq!(&net.ip[10..], &[0xff, 0xff, 203, 0, 113, 7]);
        assert_eq!(net.to_socket_addr(), addr);
        assert_eq!(net.to_string(), "203.0.113.7:17140");
    }

    #[test]
    fn test_ipv6_kept() {
        let addr: SocketAddr = "[2001:db8::1]:18140".parse().unwrap();
        let net = NetAddress::from(addr);
        assert!(!net.is_ipv4());
        assert_eq!(net.to_socket_addr(), addr);
    }
}
