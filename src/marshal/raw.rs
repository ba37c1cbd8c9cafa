//! Raw mirrors of native IP Helper structures.
//!
//! These types are only ever used as read-only views over memory owned by
//! the system call that produced it, or as plain values passed back into a
//! system call. Field order and padding reproduce the SDK declarations; the
//! layout tests in `raw_tests.rs` check them against [`super::layout`].
//!
//! Structures whose native declaration starts with
//! `union { ULONGLONG Alignment; struct { ... }; }` or holds a `ULONG64` are
//! declared `align(8)`, so 32-bit targets whose `u64` alignment is 4 still
//! produce the MSVC layout.

#![allow(clippy::struct_field_names)]

use std::ptr;

/// Generic socket address header (`SOCKADDR`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawSockaddr {
    pub sa_family: u16,
    pub sa_data: [u8; 14],
}

/// `SOCKADDR_IN`. Port and address are in network byte order.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSockaddrIn {
    pub sin_family: u16,
    pub sin_port: u16,
    pub sin_addr: [u8; 4],
    pub sin_zero: [u8; 8],
}

/// `SOCKADDR_IN6` (the `_LH` variant with a plain scope id).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSockaddrIn6 {
    pub sin6_family: u16,
    pub sin6_port: u16,
    pub sin6_flowinfo: u32,
    pub sin6_addr: [u8; 16],
    pub sin6_scope_id: u32,
}

/// `SOCKADDR_INET`: IPv4 or IPv6 socket address tagged by its family.
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawSockaddrInet {
    pub ipv4: RawSockaddrIn,
    pub ipv6: RawSockaddrIn6,
    pub si_family: u16,
}

impl Default for RawSockaddrInet {
    fn default() -> Self {
        Self {
            ipv6: RawSockaddrIn6::default(),
        }
    }
}

/// `SOCKET_ADDRESS`: pointer to a family-tagged sockaddr plus its length.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawSocketAddress {
    pub lp_sockaddr: *const RawSockaddr,
    pub i_sockaddr_length: i32,
}

impl Default for RawSocketAddress {
    fn default() -> Self {
        Self {
            lp_sockaddr: ptr::null(),
            i_sockaddr_length: 0,
        }
    }
}

/// `IP_ADDRESS_PREFIX`.
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct RawIpAddressPrefix {
    pub prefix: RawSockaddrInet,
    pub prefix_length: u8,
}

/// `GUID`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawGuid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// `IP_ADAPTER_UNICAST_ADDRESS_LH`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterUnicastAddress {
    pub length: u32,
    pub flags: u32,
    pub next: *const Self,
    pub address: RawSocketAddress,
    pub prefix_origin: i32,
    pub suffix_origin: i32,
    pub dad_state: i32,
    pub valid_lifetime: u32,
    pub preferred_lifetime: u32,
    pub lease_lifetime: u32,
    pub on_link_prefix_length: u8,
}

/// `IP_ADAPTER_ANYCAST_ADDRESS_XP`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterAnycastAddress {
    pub length: u32,
    pub flags: u32,
    pub next: *const Self,
    pub address: RawSocketAddress,
}

/// `IP_ADAPTER_MULTICAST_ADDRESS_XP`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterMulticastAddress {
    pub length: u32,
    pub flags: u32,
    pub next: *const Self,
    pub address: RawSocketAddress,
}

/// `IP_ADAPTER_DNS_SERVER_ADDRESS_XP`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterDnsServerAddress {
    pub length: u32,
    pub reserved: u32,
    pub next: *const Self,
    pub address: RawSocketAddress,
}

/// `IP_ADAPTER_WINS_SERVER_ADDRESS_LH`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterWinsServerAddress {
    pub length: u32,
    pub reserved: u32,
    pub next: *const Self,
    pub address: RawSocketAddress,
}

/// `IP_ADAPTER_GATEWAY_ADDRESS_LH`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterGatewayAddress {
    pub length: u32,
    pub reserved: u32,
    pub next: *const Self,
    pub address: RawSocketAddress,
}

/// `IP_ADAPTER_PREFIX_XP`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterPrefix {
    pub length: u32,
    pub flags: u32,
    pub next: *const Self,
    pub address: RawSocketAddress,
    pub prefix_length: u32,
}

/// Capacity of `IP_ADAPTER_DNS_SUFFIX::String` in UTF-16 units.
pub const MAX_DNS_SUFFIX_STRING_LENGTH: usize = 256;

/// `IP_ADAPTER_DNS_SUFFIX`.
#[repr(C)]
#[derive(Debug)]
pub struct RawIpAdapterDnsSuffix {
    pub next: *const Self,
    pub string: [u16; MAX_DNS_SUFFIX_STRING_LENGTH],
}

/// Capacity of `IP_ADAPTER_ADDRESSES_LH::PhysicalAddress`.
pub const MAX_ADAPTER_ADDRESS_LENGTH: usize = 8;

/// Capacity of `IP_ADAPTER_ADDRESSES_LH::Dhcpv6ClientDuid`.
pub const MAX_DHCPV6_DUID_LENGTH: usize = 130;

/// Number of entries in `IP_ADAPTER_ADDRESSES_LH::ZoneIndices`.
pub const SCOPE_LEVEL_COUNT: usize = 16;

/// `IP_ADAPTER_ADDRESSES_LH`.
#[repr(C, align(8))]
#[derive(Debug)]
pub struct RawIpAdapterAddresses {
    pub length: u32,
    pub if_index: u32,
    pub next: *const Self,
    pub adapter_name: *const u8,
    pub first_unicast_address: *const RawIpAdapterUnicastAddress,
    pub first_anycast_address: *const RawIpAdapterAnycastAddress,
    pub first_multicast_address: *const RawIpAdapterMulticastAddress,
    pub first_dns_server_address: *const RawIpAdapterDnsServerAddress,
    pub dns_suffix: *const u16,
    pub description: *const u16,
    pub friendly_name: *const u16,
    pub physical_address: [u8; MAX_ADAPTER_ADDRESS_LENGTH],
    pub physical_address_length: u32,
    pub flags: u32,
    pub mtu: u32,
    pub if_type: u32,
    pub oper_status: i32,
    pub ipv6_if_index: u32,
    pub zone_indices: [u32; SCOPE_LEVEL_COUNT],
    pub first_prefix: *const RawIpAdapterPrefix,
    pub transmit_link_speed: u64,
    pub receive_link_speed: u64,
    pub first_wins_server_address: *const RawIpAdapterWinsServerAddress,
    pub first_gateway_address: *const RawIpAdapterGatewayAddress,
    pub ipv4_metric: u32,
    pub ipv6_metric: u32,
    pub luid: u64,
    pub dhcpv4_server: RawSocketAddress,
    pub compartment_id: u32,
    pub network_guid: RawGuid,
    pub connection_type: i32,
    pub tunnel_type: i32,
    pub dhcpv6_server: RawSocketAddress,
    pub dhcpv6_client_duid: [u8; MAX_DHCPV6_DUID_LENGTH],
    pub dhcpv6_client_duid_length: u32,
    pub dhcpv6_iaid: u32,
    pub first_dns_suffix: *const RawIpAdapterDnsSuffix,
}

/// `MIB_IPFORWARD_ROW2`.
///
/// `align(8)` keeps the row array of [`RawMibIpforwardTable2`] at offset 8 on
/// every target.
#[repr(C, align(8))]
#[derive(Clone, Copy, Default)]
pub struct RawMibIpforwardRow2 {
    pub interface_luid: u64,
    pub interface_index: u32,
    pub destination_prefix: RawIpAddressPrefix,
    pub next_hop: RawSockaddrInet,
    pub site_prefix_length: u8,
    pub valid_lifetime: u32,
    pub preferred_lifetime: u32,
    pub metric: u32,
    pub protocol: i32,
    pub loopback: u8,
    pub autoconfigure_address: u8,
    pub publish: u8,
    pub immortal: u8,
    pub age: u32,
    pub origin: i32,
}

/// `MIB_IPFORWARD_TABLE2`. `table` is a variable-length trailing array of
/// `num_entries` rows; only its first element is declared.
#[repr(C)]
pub struct RawMibIpforwardTable2 {
    pub num_entries: u32,
    pub table: [RawMibIpforwardRow2; 1],
}

/// Node of a native singly linked list.
///
/// Implementors expose their `Next` field; a null pointer terminates the list.
pub trait LinkedRecord {
    /// Native structure name, used in error messages.
    const NAME: &'static str;

    /// Returns the `Next` field of this node.
    fn next(&self) -> *const Self;
}

macro_rules! linked_record {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl LinkedRecord for $ty {
                const NAME: &'static str = $name;

                fn next(&self) -> *const Self {
                    self.next
                }
            }
        )+
    };
}

linked_record! {
    RawIpAdapterAddresses => "IP_ADAPTER_ADDRESSES_LH",
    RawIpAdapterUnicastAddress => "IP_ADAPTER_UNICAST_ADDRESS_LH",
    RawIpAdapterAnycastAddress => "IP_ADAPTER_ANYCAST_ADDRESS_XP",
    RawIpAdapterMulticastAddress => "IP_ADAPTER_MULTICAST_ADDRESS_XP",
    RawIpAdapterDnsServerAddress => "IP_ADAPTER_DNS_SERVER_ADDRESS_XP",
    RawIpAdapterWinsServerAddress => "IP_ADAPTER_WINS_SERVER_ADDRESS_LH",
    RawIpAdapterGatewayAddress => "IP_ADAPTER_GATEWAY_ADDRESS_LH",
    RawIpAdapterPrefix => "IP_ADAPTER_PREFIX_XP",
    RawIpAdapterDnsSuffix => "IP_ADAPTER_DNS_SUFFIX",
}
