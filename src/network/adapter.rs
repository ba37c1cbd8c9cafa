//! Core network types for adapter representation.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize, Serializer};

use super::address::{AdapterAddress, AdapterPrefix, UnicastAddress};
use super::codes::{ConnectionType, OperStatus, TunnelType};
use crate::marshal::raw::{RawGuid, SCOPE_LEVEL_COUNT};
use crate::marshal::sockaddr::{AF_INET, AF_INET6, AF_UNSPEC};

/// `IF_TYPE_ETHERNET_CSMACD` from `ipifcons.h`.
pub const IF_TYPE_ETHERNET_CSMACD: u32 = 6;
/// `IF_TYPE_PPP`.
pub const IF_TYPE_PPP: u32 = 23;
/// `IF_TYPE_SOFTWARE_LOOPBACK`.
pub const IF_TYPE_SOFTWARE_LOOPBACK: u32 = 24;
/// `IF_TYPE_IEEE80211`.
pub const IF_TYPE_IEEE80211: u32 = 71;
/// `IF_TYPE_TUNNEL`.
pub const IF_TYPE_TUNNEL: u32 = 131;

/// `IP_ADAPTER_DHCP_ENABLED` bit of [`Adapter::flags`].
pub const ADAPTER_FLAG_DHCP_ENABLED: u32 = 0x0004;
/// `IP_ADAPTER_RECEIVE_ONLY`.
pub const ADAPTER_FLAG_RECEIVE_ONLY: u32 = 0x0008;
/// `IP_ADAPTER_IPV4_ENABLED`.
pub const ADAPTER_FLAG_IPV4_ENABLED: u32 = 0x0080;
/// `IP_ADAPTER_IPV6_ENABLED`.
pub const ADAPTER_FLAG_IPV6_ENABLED: u32 = 0x0100;

/// IP version selector for queries and route listings.
///
/// Maps onto the address family passed to the system calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    /// IPv4 only (`AF_INET`).
    V4,
    /// IPv6 only (`AF_INET6`).
    V6,
    /// Both families (`AF_UNSPEC`).
    Both,
}

impl IpVersion {
    /// Returns true if this version includes IPv4.
    #[must_use]
    pub const fn includes_v4(self) -> bool {
        matches!(self, Self::V4 | Self::Both)
    }

    /// Returns true if this version includes IPv6.
    #[must_use]
    pub const fn includes_v6(self) -> bool {
        matches!(self, Self::V6 | Self::Both)
    }

    /// Returns true if `addr` belongs to a family this version includes.
    #[must_use]
    pub const fn includes(self, addr: &IpAddr) -> bool {
        match addr {
            IpAddr::V4(_) => self.includes_v4(),
            IpAddr::V6(_) => self.includes_v6(),
        }
    }

    /// Returns the Winsock address family for this version.
    #[must_use]
    pub const fn address_family(self) -> u16 {
        match self {
            Self::V4 => AF_INET,
            Self::V6 => AF_INET6,
            Self::Both => AF_UNSPEC,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Both => write!(f, "Both"),
        }
    }
}

/// Network adapter type classification.
///
/// Coarse grouping of the native `IfType` used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterKind {
    /// Physical Ethernet adapter.
    Ethernet,
    /// Wireless (Wi-Fi) adapter.
    Wireless,
    /// Loopback adapter (localhost).
    Loopback,
    /// Tunnel or PPP adapter (VPNs, WSL, etc.).
    Virtual,
    /// Unknown or other adapter type, preserving the original type code.
    Other(u32),
}

impl AdapterKind {
    /// Maps a native `IF_TYPE_*` code to a kind.
    #[must_use]
    pub const fn from_if_type(if_type: u32) -> Self {
        match if_type {
            IF_TYPE_ETHERNET_CSMACD => Self::Ethernet,
            IF_TYPE_IEEE80211 => Self::Wireless,
            IF_TYPE_SOFTWARE_LOOPBACK => Self::Loopback,
            IF_TYPE_TUNNEL | IF_TYPE_PPP => Self::Virtual,
            other => Self::Other(other),
        }
    }

    /// Returns true if this is a virtual adapter.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual)
    }

    /// Returns true if this is a loopback adapter.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        matches!(self, Self::Loopback)
    }
}

/// A globally unique identifier, displayed in registry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl From<RawGuid> for Guid {
    fn from(raw: RawGuid) -> Self {
        Self {
            data1: raw.data1,
            data2: raw.data2,
            data3: raw.data3,
            data4: raw.data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Serializes a hardware address as dash-separated hex (`00-15-5D-01-02-03`).
fn serialize_hardware_address<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    let text = bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join("-");
    serializer.serialize_str(&text)
}

/// One network adapter with everything `GetAdaptersAddresses` reports for it.
///
/// Fully owned; holds no reference into the buffer it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adapter {
    /// IPv4 interface index (0 when IPv4 is disabled).
    pub if_index: u32,
    /// Permanent adapter name, usually a GUID string.
    pub adapter_name: String,
    /// User-visible name (e.g. "Ethernet", "Wi-Fi").
    pub friendly_name: String,
    pub description: String,
    pub dns_suffix: String,
    pub unicast_addresses: Vec<UnicastAddress>,
    pub anycast_addresses: Vec<AdapterAddress>,
    pub multicast_addresses: Vec<AdapterAddress>,
    pub dns_servers: Vec<IpAddr>,
    pub wins_servers: Vec<IpAddr>,
    pub gateways: Vec<IpAddr>,
    pub prefixes: Vec<AdapterPrefix>,
    pub dns_suffixes: Vec<String>,
    /// Hardware address, trimmed to its declared length.
    #[serde(serialize_with = "serialize_hardware_address")]
    pub physical_address: Vec<u8>,
    /// `IP_ADAPTER_*` flag bits.
    pub flags: u32,
    pub mtu: u32,
    /// Native `IF_TYPE_*` code; see [`Adapter::kind`].
    pub if_type: u32,
    pub oper_status: OperStatus,
    pub ipv6_if_index: u32,
    pub zone_indices: [u32; SCOPE_LEVEL_COUNT],
    /// Bits per second.
    pub transmit_link_speed: u64,
    /// Bits per second.
    pub receive_link_speed: u64,
    pub ipv4_metric: u32,
    pub ipv6_metric: u32,
    /// Locally unique identifier (`NET_LUID`), stable while the system runs.
    pub luid: u64,
    pub dhcpv4_server: Option<IpAddr>,
    pub compartment_id: u32,
    pub network_guid: Guid,
    pub connection_type: ConnectionType,
    pub tunnel_type: TunnelType,
    pub dhcpv6_server: Option<IpAddr>,
    /// DHCPv6 client DUID, trimmed to its declared length.
    pub dhcpv6_client_duid: Vec<u8>,
    pub dhcpv6_iaid: u32,
}

impl Default for Adapter {
    fn default() -> Self {
        Self {
            if_index: 0,
            adapter_name: String::new(),
            friendly_name: String::new(),
            description: String::new(),
            dns_suffix: String::new(),
            unicast_addresses: Vec::new(),
            anycast_addresses: Vec::new(),
            multicast_addresses: Vec::new(),
            dns_servers: Vec::new(),
            wins_servers: Vec::new(),
            gateways: Vec::new(),
            prefixes: Vec::new(),
            dns_suffixes: Vec::new(),
            physical_address: Vec::new(),
            flags: 0,
            mtu: 0,
            if_type: 0,
            oper_status: OperStatus::Unknown,
            ipv6_if_index: 0,
            zone_indices: [0; SCOPE_LEVEL_COUNT],
            transmit_link_speed: 0,
            receive_link_speed: 0,
            ipv4_metric: 0,
            ipv6_metric: 0,
            luid: 0,
            dhcpv4_server: None,
            compartment_id: 0,
            network_guid: Guid::default(),
            connection_type: ConnectionType::Dedicated,
            tunnel_type: TunnelType::None,
            dhcpv6_server: None,
            dhcpv6_client_duid: Vec::new(),
            dhcpv6_iaid: 0,
        }
    }
}

impl Adapter {
    /// Returns the coarse adapter kind derived from [`Adapter::if_type`].
    #[must_use]
    pub const fn kind(&self) -> AdapterKind {
        AdapterKind::from_if_type(self.if_type)
    }

    /// Returns all IPv4 unicast addresses, in list order.
    #[must_use]
    pub fn ipv4_addresses(&self) -> Vec<Ipv4Addr> {
        self.unicast_addresses
            .iter()
            .filter_map(|u| match u.address {
                IpAddr::V4(addr) => Some(addr),
                IpAddr::V6(_) => None,
            })
            .collect()
    }

    /// Returns all IPv6 unicast addresses, in list order.
    #[must_use]
    pub fn ipv6_addresses(&self) -> Vec<Ipv6Addr> {
        self.unicast_addresses
            .iter()
            .filter_map(|u| match u.address {
                IpAddr::V6(addr) => Some(addr),
                IpAddr::V4(_) => None,
            })
            .collect()
    }

    /// Returns true if this adapter has any unicast address.
    #[must_use]
    pub fn has_addresses(&self) -> bool {
        !self.unicast_addresses.is_empty()
    }

    /// Returns the number of unicast addresses (IPv4 + IPv6).
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.unicast_addresses.len()
    }

    /// Returns true if DHCP is enabled on this adapter.
    #[must_use]
    pub const fn dhcp_enabled(&self) -> bool {
        self.flags & ADAPTER_FLAG_DHCP_ENABLED != 0
    }

    /// Returns true if the adapter can only receive.
    #[must_use]
    pub const fn receive_only(&self) -> bool {
        self.flags & ADAPTER_FLAG_RECEIVE_ONLY != 0
    }

    /// Returns true if IPv4 is enabled on this adapter.
    #[must_use]
    pub const fn ipv4_enabled(&self) -> bool {
        self.flags & ADAPTER_FLAG_IPV4_ENABLED != 0
    }

    /// Returns true if IPv6 is enabled on this adapter.
    #[must_use]
    pub const fn ipv6_enabled(&self) -> bool {
        self.flags & ADAPTER_FLAG_IPV6_ENABLED != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::codes::{DadState, PrefixOrigin, SuffixOrigin};

    fn unicast(addr: &str) -> UnicastAddress {
        UnicastAddress {
            address: addr.parse().unwrap(),
            flags: 0,
            prefix_origin: PrefixOrigin::Manual,
            suffix_origin: SuffixOrigin::Manual,
            dad_state: DadState::Preferred,
            valid_lifetime: u32::MAX,
            preferred_lifetime: u32::MAX,
            lease_lifetime: u32::MAX,
            on_link_prefix_length: 24,
        }
    }

    mod ip_version {
        use super::*;

        #[test]
        fn v4_includes_only_v4() {
            assert!(IpVersion::V4.includes_v4());
            assert!(!IpVersion::V4.includes_v6());
        }

        #[test]
        fn v6_includes_only_v6() {
            assert!(!IpVersion::V6.includes_v4());
            assert!(IpVersion::V6.includes_v6());
        }

        #[test]
        fn both_includes_both() {
            assert!(IpVersion::Both.includes_v4());
            assert!(IpVersion::Both.includes_v6());
        }

        #[test]
        fn includes_checks_address_family() {
            let v4: IpAddr = "10.0.0.1".parse().unwrap();
            let v6: IpAddr = "fe80::1".parse().unwrap();
            assert!(IpVersion::V4.includes(&v4));
            assert!(!IpVersion::V4.includes(&v6));
            assert!(IpVersion::Both.includes(&v6));
        }

        #[test]
        fn maps_to_winsock_families() {
            assert_eq!(IpVersion::V4.address_family(), 2);
            assert_eq!(IpVersion::V6.address_family(), 23);
            assert_eq!(IpVersion::Both.address_family(), 0);
        }

        #[test]
        fn display_formats_correctly() {
            assert_eq!(format!("{}", IpVersion::V4), "IPv4");
            assert_eq!(format!("{}", IpVersion::V6), "IPv6");
            assert_eq!(format!("{}", IpVersion::Both), "Both");
        }
    }

    mod adapter_kind {
        use super::*;

        #[test]
        fn maps_known_if_types() {
            assert_eq!(AdapterKind::from_if_type(6), AdapterKind::Ethernet);
            assert_eq!(AdapterKind::from_if_type(71), AdapterKind::Wireless);
            assert_eq!(AdapterKind::from_if_type(24), AdapterKind::Loopback);
        }

        #[test]
        fn tunnel_and_ppp_are_virtual() {
            assert!(AdapterKind::from_if_type(IF_TYPE_TUNNEL).is_virtual());
            assert!(AdapterKind::from_if_type(IF_TYPE_PPP).is_virtual());
            assert!(!AdapterKind::Ethernet.is_virtual());
        }

        #[test]
        fn loopback_is_loopback() {
            assert!(AdapterKind::Loopback.is_loopback());
            assert!(!AdapterKind::Ethernet.is_loopback());
        }

        #[test]
        fn unknown_if_type_preserves_code() {
            assert_eq!(AdapterKind::from_if_type(999), AdapterKind::Other(999));
        }
    }

    mod guid {
        use super::*;

        #[test]
        fn displays_in_registry_form() {
            let guid = Guid {
                data1: 0x4D36_E972,
                data2: 0xE325,
                data3: 0x11CE,
                data4: [0xBF, 0xC1, 0x08, 0x00, 0x2B, 0xE1, 0x03, 0x18],
            };
            assert_eq!(guid.to_string(), "{4D36E972-E325-11CE-BFC1-08002BE10318}");
        }

        #[test]
        fn serializes_as_string() {
            let json = serde_json::to_string(&Guid::default()).unwrap();
            assert_eq!(json, "\"{00000000-0000-0000-0000-000000000000}\"");
        }
    }

    mod adapter {
        use super::*;

        fn make_adapter() -> Adapter {
            Adapter {
                friendly_name: "eth0".to_string(),
                if_type: IF_TYPE_ETHERNET_CSMACD,
                unicast_addresses: vec![unicast("192.168.1.1"), unicast("fe80::1")],
                ..Adapter::default()
            }
        }

        #[test]
        fn kind_follows_if_type() {
            assert_eq!(make_adapter().kind(), AdapterKind::Ethernet);
        }

        #[test]
        fn addresses_are_split_by_family() {
            let adapter = make_adapter();
            assert_eq!(adapter.ipv4_addresses(), vec![Ipv4Addr::new(192, 168, 1, 1)]);
            assert_eq!(adapter.ipv6_addresses(), vec!["fe80::1".parse::<Ipv6Addr>().unwrap()]);
        }

        #[test]
        fn address_count_sums_both_families() {
            assert_eq!(make_adapter().address_count(), 2);
            assert!(make_adapter().has_addresses());
        }

        #[test]
        fn empty_adapter_has_no_addresses() {
            let adapter = Adapter::default();
            assert!(!adapter.has_addresses());
            assert_eq!(adapter.address_count(), 0);
        }

        #[test]
        fn flag_helpers_read_bits() {
            let adapter = Adapter {
                flags: ADAPTER_FLAG_DHCP_ENABLED | ADAPTER_FLAG_IPV4_ENABLED,
                ..Adapter::default()
            };
            assert!(adapter.dhcp_enabled());
            assert!(adapter.ipv4_enabled());
            assert!(!adapter.ipv6_enabled());
            assert!(!adapter.receive_only());
        }

        #[test]
        fn physical_address_serializes_as_hex() {
            let adapter = Adapter {
                physical_address: vec![0x00, 0x15, 0x5D, 0x01, 0x02, 0xAB],
                ..Adapter::default()
            };
            let json = serde_json::to_value(&adapter).unwrap();
            assert_eq!(json["physical_address"], "00-15-5D-01-02-AB");
        }

        #[test]
        fn equality_requires_same_addresses() {
            let a = make_adapter();
            let mut b = make_adapter();
            b.unicast_addresses.pop();
            assert_ne!(a, b);
        }
    }
}
