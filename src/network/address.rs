//! Per-address value types attached to an [`Adapter`](super::Adapter).

use std::fmt;
use std::net::IpAddr;

use ipnet::IpNet;
use serde::Serialize;

use super::codes::{DadState, PrefixOrigin, SuffixOrigin};

/// `IP_ADAPTER_ADDRESS_DNS_ELIGIBLE` bit of an address's flags.
pub const ADDRESS_FLAG_DNS_ELIGIBLE: u32 = 0x01;
/// `IP_ADAPTER_ADDRESS_TRANSIENT`.
pub const ADDRESS_FLAG_TRANSIENT: u32 = 0x02;

/// A unicast address assigned to an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicastAddress {
    pub address: IpAddr,
    pub flags: u32,
    pub prefix_origin: PrefixOrigin,
    pub suffix_origin: SuffixOrigin,
    pub dad_state: DadState,
    /// Seconds; `u32::MAX` means infinite.
    pub valid_lifetime: u32,
    /// Seconds; `u32::MAX` means infinite.
    pub preferred_lifetime: u32,
    /// Seconds; `u32::MAX` means infinite.
    pub lease_lifetime: u32,
    pub on_link_prefix_length: u8,
}

impl UnicastAddress {
    /// Returns the on-link network this address belongs to.
    ///
    /// `None` if the on-link prefix length is out of range for the family.
    #[must_use]
    pub fn network(&self) -> Option<IpNet> {
        IpNet::new(self.address, self.on_link_prefix_length)
            .ok()
            .map(|net| net.trunc())
    }

    /// Returns true if the address may be registered in DNS.
    #[must_use]
    pub const fn is_dns_eligible(&self) -> bool {
        self.flags & ADDRESS_FLAG_DNS_ELIGIBLE != 0
    }
}

/// An anycast or multicast address of an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdapterAddress {
    pub address: IpAddr,
    pub flags: u32,
}

impl AdapterAddress {
    /// Returns true if the address may be registered in DNS.
    #[must_use]
    pub const fn is_dns_eligible(&self) -> bool {
        self.flags & ADDRESS_FLAG_DNS_ELIGIBLE != 0
    }

    /// Returns true if the address is a cluster address.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.flags & ADDRESS_FLAG_TRANSIENT != 0
    }
}

/// An on-link prefix of an adapter.
///
/// Kept as address plus length rather than [`IpNet`] because the system
/// reports the adapter's own prefix list, including host entries such as
/// `255.255.255.255/32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdapterPrefix {
    pub address: IpAddr,
    pub prefix_length: u32,
    pub flags: u32,
}

impl fmt::Display for AdapterPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unicast(addr: &str, len: u8) -> UnicastAddress {
        UnicastAddress {
            address: addr.parse().unwrap(),
            flags: ADDRESS_FLAG_DNS_ELIGIBLE,
            prefix_origin: PrefixOrigin::Dhcp,
            suffix_origin: SuffixOrigin::Dhcp,
            dad_state: DadState::Preferred,
            valid_lifetime: 86_400,
            preferred_lifetime: 86_400,
            lease_lifetime: 86_400,
            on_link_prefix_length: len,
        }
    }

    #[test]
    fn network_truncates_host_bits() {
        let addr = unicast("192.168.1.37", 24);
        assert_eq!(addr.network(), Some("192.168.1.0/24".parse().unwrap()));
    }

    #[test]
    fn network_of_ipv6_address() {
        let addr = unicast("fe80::1234:5678", 64);
        assert_eq!(addr.network(), Some("fe80::/64".parse().unwrap()));
    }

    #[test]
    fn network_rejects_overlong_prefix() {
        assert_eq!(unicast("10.0.0.1", 33).network(), None);
    }

    #[test]
    fn unicast_flags() {
        assert!(unicast("10.0.0.1", 8).is_dns_eligible());
    }

    #[test]
    fn adapter_address_flags() {
        let addr = AdapterAddress {
            address: "ff02::1".parse().unwrap(),
            flags: ADDRESS_FLAG_TRANSIENT,
        };
        assert!(addr.is_transient());
        assert!(!addr.is_dns_eligible());
    }

    #[test]
    fn prefix_displays_as_cidr() {
        let prefix = AdapterPrefix {
            address: "192.168.1.0".parse().unwrap(),
            prefix_length: 24,
            flags: 0,
        };
        assert_eq!(prefix.to_string(), "192.168.1.0/24");
    }
}
