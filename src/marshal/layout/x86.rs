//! Descriptors for 32-bit targets (i686).

use super::{FieldLayout as F, RecordLayout};

pub const IP_ADAPTER_ADDRESSES_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_ADDRESSES_LH",
    size: 376,
    fields: &[
        F::new("Length", 0),
        F::new("IfIndex", 4),
        F::new("Next", 8),
        F::new("AdapterName", 12),
        F::new("FirstUnicastAddress", 16),
        F::new("FirstAnycastAddress", 20),
        F::new("FirstMulticastAddress", 24),
        F::new("FirstDnsServerAddress", 28),
        F::new("DnsSuffix", 32),
        F::new("Description", 36),
        F::new("FriendlyName", 40),
        F::new("PhysicalAddress", 44),
        F::new("PhysicalAddressLength", 52),
        F::new("Flags", 56),
        F::new("Mtu", 60),
        F::new("IfType", 64),
        F::new("OperStatus", 68),
        F::new("Ipv6IfIndex", 72),
        F::new("ZoneIndices", 76),
        F::new("FirstPrefix", 140),
        F::new("TransmitLinkSpeed", 144),
        F::new("ReceiveLinkSpeed", 152),
        F::new("FirstWinsServerAddress", 160),
        F::new("FirstGatewayAddress", 164),
        F::new("Ipv4Metric", 168),
        F::new("Ipv6Metric", 172),
        F::new("Luid", 176),
        F::new("Dhcpv4Server", 184),
        F::new("CompartmentId", 192),
        F::new("NetworkGuid", 196),
        F::new("ConnectionType", 212),
        F::new("TunnelType", 216),
        F::new("Dhcpv6Server", 220),
        F::new("Dhcpv6ClientDuid", 228),
        F::new("Dhcpv6ClientDuidLength", 360),
        F::new("Dhcpv6Iaid", 364),
        F::new("FirstDnsSuffix", 368),
    ],
};

pub const IP_ADAPTER_UNICAST_ADDRESS_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_UNICAST_ADDRESS_LH",
    size: 48,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 12),
        F::new("PrefixOrigin", 20),
        F::new("SuffixOrigin", 24),
        F::new("DadState", 28),
        F::new("ValidLifetime", 32),
        F::new("PreferredLifetime", 36),
        F::new("LeaseLifetime", 40),
        F::new("OnLinkPrefixLength", 44),
    ],
};

pub const IP_ADAPTER_ANYCAST_ADDRESS_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_ANYCAST_ADDRESS_XP",
    size: 24,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 12),
    ],
};

pub const IP_ADAPTER_MULTICAST_ADDRESS_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_MULTICAST_ADDRESS_XP",
    size: 24,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 12),
    ],
};

pub const IP_ADAPTER_DNS_SERVER_ADDRESS_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_DNS_SERVER_ADDRESS_XP",
    size: 24,
    fields: &[
        F::new("Length", 0),
        F::new("Reserved", 4),
        F::new("Next", 8),
        F::new("Address", 12),
    ],
};

pub const IP_ADAPTER_WINS_SERVER_ADDRESS_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_WINS_SERVER_ADDRESS_LH",
    size: 24,
    fields: &[
        F::new("Length", 0),
        F::new("Reserved", 4),
        F::new("Next", 8),
        F::new("Address", 12),
    ],
};

// The native record ends at 20 bytes; the 8-byte alignment of its leading
// union pads it to 24.
pub const IP_ADAPTER_GATEWAY_ADDRESS_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_GATEWAY_ADDRESS_LH",
    size: 24,
    fields: &[
        F::new("Length", 0),
        F::new("Reserved", 4),
        F::new("Next", 8),
        F::new("Address", 12),
    ],
};

pub const IP_ADAPTER_PREFIX_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_PREFIX_XP",
    size: 24,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 12),
        F::new("PrefixLength", 20),
    ],
};

pub const IP_ADAPTER_DNS_SUFFIX: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_DNS_SUFFIX",
    size: 516,
    fields: &[F::new("Next", 0), F::new("String", 4)],
};

pub const SOCKET_ADDRESS: RecordLayout = RecordLayout {
    name: "SOCKET_ADDRESS",
    size: 8,
    fields: &[F::new("lpSockaddr", 0), F::new("iSockaddrLength", 4)],
};

pub const SOCKADDR_IN: RecordLayout = RecordLayout {
    name: "SOCKADDR_IN",
    size: 16,
    fields: &[
        F::new("sin_family", 0),
        F::new("sin_port", 2),
        F::new("sin_addr", 4),
        F::new("sin_zero", 8),
    ],
};

pub const SOCKADDR_IN6: RecordLayout = RecordLayout {
    name: "SOCKADDR_IN6",
    size: 28,
    fields: &[
        F::new("sin6_family", 0),
        F::new("sin6_port", 2),
        F::new("sin6_flowinfo", 4),
        F::new("sin6_addr", 8),
        F::new("sin6_scope_id", 24),
    ],
};

pub const SOCKADDR_INET: RecordLayout = RecordLayout {
    name: "SOCKADDR_INET",
    size: 28,
    fields: &[F::new("si_family", 0)],
};

pub const IP_ADDRESS_PREFIX: RecordLayout = RecordLayout {
    name: "IP_ADDRESS_PREFIX",
    size: 32,
    fields: &[F::new("Prefix", 0), F::new("PrefixLength", 28)],
};

pub const GUID: RecordLayout = RecordLayout {
    name: "GUID",
    size: 16,
    fields: &[
        F::new("Data1", 0),
        F::new("Data2", 4),
        F::new("Data3", 6),
        F::new("Data4", 8),
    ],
};

pub const MIB_IPFORWARD_ROW2: RecordLayout = RecordLayout {
    name: "MIB_IPFORWARD_ROW2",
    size: 104,
    fields: &[
        F::new("InterfaceLuid", 0),
        F::new("InterfaceIndex", 8),
        F::new("DestinationPrefix", 12),
        F::new("NextHop", 44),
        F::new("SitePrefixLength", 72),
        F::new("ValidLifetime", 76),
        F::new("PreferredLifetime", 80),
        F::new("Metric", 84),
        F::new("Protocol", 88),
        F::new("Loopback", 92),
        F::new("AutoconfigureAddress", 93),
        F::new("Publish", 94),
        F::new("Immortal", 95),
        F::new("Age", 96),
        F::new("Origin", 100),
    ],
};

// MSVC aligns the 8-byte row array even on 32-bit targets.
pub const MIB_IPFORWARD_TABLE2: RecordLayout = RecordLayout {
    name: "MIB_IPFORWARD_TABLE2",
    size: 112,
    fields: &[F::new("NumEntries", 0), F::new("Table", 8)],
};

/// Every record in this table, in a fixed order shared with the other
/// architecture.
pub const ALL: &[RecordLayout] = &[
    IP_ADAPTER_ADDRESSES_LH,
    IP_ADAPTER_UNICAST_ADDRESS_LH,
    IP_ADAPTER_ANYCAST_ADDRESS_XP,
    IP_ADAPTER_MULTICAST_ADDRESS_XP,
    IP_ADAPTER_DNS_SERVER_ADDRESS_XP,
    IP_ADAPTER_WINS_SERVER_ADDRESS_LH,
    IP_ADAPTER_GATEWAY_ADDRESS_LH,
    IP_ADAPTER_PREFIX_XP,
    IP_ADAPTER_DNS_SUFFIX,
    SOCKET_ADDRESS,
    SOCKADDR_IN,
    SOCKADDR_IN6,
    SOCKADDR_INET,
    IP_ADDRESS_PREFIX,
    GUID,
    MIB_IPFORWARD_ROW2,
    MIB_IPFORWARD_TABLE2,
];
