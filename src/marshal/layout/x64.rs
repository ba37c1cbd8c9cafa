//! Descriptors for 64-bit targets (x86-64 and ARM64).

use super::{FieldLayout as F, RecordLayout};

pub const IP_ADAPTER_ADDRESSES_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_ADDRESSES_LH",
    size: 448,
    fields: &[
        F::new("Length", 0),
        F::new("IfIndex", 4),
        F::new("Next", 8),
        F::new("AdapterName", 16),
        F::new("FirstUnicastAddress", 24),
        F::new("FirstAnycastAddress", 32),
        F::new("FirstMulticastAddress", 40),
        F::new("FirstDnsServerAddress", 48),
        F::new("DnsSuffix", 56),
        F::new("Description", 64),
        F::new("FriendlyName", 72),
        F::new("PhysicalAddress", 80),
        F::new("PhysicalAddressLength", 88),
        F::new("Flags", 92),
        F::new("Mtu", 96),
        F::new("IfType", 100),
        F::new("OperStatus", 104),
        F::new("Ipv6IfIndex", 108),
        F::new("ZoneIndices", 112),
        F::new("FirstPrefix", 176),
        F::new("TransmitLinkSpeed", 184),
        F::new("ReceiveLinkSpeed", 192),
        F::new("FirstWinsServerAddress", 200),
        F::new("FirstGatewayAddress", 208),
        F::new("Ipv4Metric", 216),
        F::new("Ipv6Metric", 220),
        F::new("Luid", 224),
        F::new("Dhcpv4Server", 232),
        F::new("CompartmentId", 248),
        F::new("NetworkGuid", 252),
        F::new("ConnectionType", 268),
        F::new("TunnelType", 272),
        F::new("Dhcpv6Server", 280),
        F::new("Dhcpv6ClientDuid", 296),
        F::new("Dhcpv6ClientDuidLength", 428),
        F::new("Dhcpv6Iaid", 432),
        F::new("FirstDnsSuffix", 440),
    ],
};

pub const IP_ADAPTER_UNICAST_ADDRESS_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_UNICAST_ADDRESS_LH",
    size: 64,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 16),
        F::new("PrefixOrigin", 32),
        F::new("SuffixOrigin", 36),
        F::new("DadState", 40),
        F::new("ValidLifetime", 44),
        F::new("PreferredLifetime", 48),
        F::new("LeaseLifetime", 52),
        F::new("OnLinkPrefixLength", 56),
    ],
};

pub const IP_ADAPTER_ANYCAST_ADDRESS_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_ANYCAST_ADDRESS_XP",
    size: 32,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 16),
    ],
};

pub const IP_ADAPTER_MULTICAST_ADDRESS_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_MULTICAST_ADDRESS_XP",
    size: 32,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 16),
    ],
};

pub const IP_ADAPTER_DNS_SERVER_ADDRESS_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_DNS_SERVER_ADDRESS_XP",
    size: 32,
    fields: &[
        F::new("Length", 0),
        F::new("Reserved", 4),
        F::new("Next", 8),
        F::new("Address", 16),
    ],
};

pub const IP_ADAPTER_WINS_SERVER_ADDRESS_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_WINS_SERVER_ADDRESS_LH",
    size: 32,
    fields: &[
        F::new("Length", 0),
        F::new("Reserved", 4),
        F::new("Next", 8),
        F::new("Address", 16),
    ],
};

pub const IP_ADAPTER_GATEWAY_ADDRESS_LH: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_GATEWAY_ADDRESS_LH",
    size: 32,
    fields: &[
        F::new("Length", 0),
        F::new("Reserved", 4),
        F::new("Next", 8),
        F::new("Address", 16),
    ],
};

pub const IP_ADAPTER_PREFIX_XP: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_PREFIX_XP",
    size: 40,
    fields: &[
        F::new("Length", 0),
        F::new("Flags", 4),
        F::new("Next", 8),
        F::new("Address", 16),
        F::new("PrefixLength", 32),
    ],
};

pub const IP_ADAPTER_DNS_SUFFIX: RecordLayout = RecordLayout {
    name: "IP_ADAPTER_DNS_SUFFIX",
    size: 520,
    fields: &[F::new("Next", 0), F::new("String", 8)],
};

pub const SOCKET_ADDRESS: RecordLayout = RecordLayout {
    name: "SOCKET_ADDRESS",
    size: 16,
    fields: &[F::new("lpSockaddr", 0), F::new("iSockaddrLength", 8)],
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
