//! Translation between native IP Helper records and owned Rust values.
//!
//! This module knows nothing about system calls. It describes the native
//! record layouts ([`layout`]), mirrors them as `#[repr(C)]` types ([`raw`]),
//! and provides the primitives every converter is built from:
//!
//! - [`sockaddr`]: family-tagged socket addresses and prefixes
//! - [`strings`]: zero-terminated and fixed-size native strings
//! - [`walk`]: bounded traversal of linked lists and row arrays
//!
//! [`verify_layouts`] must succeed before any native buffer is interpreted.

mod error;
pub mod layout;
pub mod raw;
pub mod sockaddr;
pub mod strings;
pub mod walk;


pub use error::MarshalError;
pub use layout::{FieldLayout, RecordLayout};
pub use raw::LinkedRecord;
pub use walk::{MAX_LIST_LENGTH, collect_contiguous, collect_linked};

use std::mem::{offset_of, size_of};

use layout::current;
use raw::*;

/// Checks the compiled mirrors against the descriptor table of the active
/// pointer width.
///
/// Sizes of every mirrored record are compared, plus the offset of the row
/// array inside `MIB_IPFORWARD_TABLE2`, which is the only offset the route
/// converter computes from the descriptor rather than from the mirror.
///
/// # Errors
///
/// Returns [`MarshalError::MalformedNativeLayout`] naming the first record
/// that disagrees.
pub fn verify_layouts() -> Result<(), MarshalError> {
    let sizes = [
        (&current::IP_ADAPTER_ADDRESSES_LH, size_of::<RawIpAdapterAddresses>()),
        (&current::IP_ADAPTER_UNICAST_ADDRESS_LH, size_of::<RawIpAdapterUnicastAddress>()),
        (&current::IP_ADAPTER_ANYCAST_ADDRESS_XP, size_of::<RawIpAdapterAnycastAddress>()),
        (&current::IP_ADAPTER_MULTICAST_ADDRESS_XP, size_of::<RawIpAdapterMulticastAddress>()),
        (&current::IP_ADAPTER_DNS_SERVER_ADDRESS_XP, size_of::<RawIpAdapterDnsServerAddress>()),
        (&current::IP_ADAPTER_WINS_SERVER_ADDRESS_LH, size_of::<RawIpAdapterWinsServerAddress>()),
        (&current::IP_ADAPTER_GATEWAY_ADDRESS_LH, size_of::<RawIpAdapterGatewayAddress>()),
        (&current::IP_ADAPTER_PREFIX_XP, size_of::<RawIpAdapterPrefix>()),
        (&current::IP_ADAPTER_DNS_SUFFIX, size_of::<RawIpAdapterDnsSuffix>()),
        (&current::SOCKET_ADDRESS, size_of::<RawSocketAddress>()),
        (&current::SOCKADDR_IN, size_of::<RawSockaddrIn>()),
        (&current::SOCKADDR_IN6, size_of::<RawSockaddrIn6>()),
        (&current::SOCKADDR_INET, size_of::<RawSockaddrInet>()),
        (&current::IP_ADDRESS_PREFIX, size_of::<RawIpAddressPrefix>()),
        (&current::GUID, size_of::<RawGuid>()),
        (&current::MIB_IPFORWARD_ROW2, size_of::<RawMibIpforwardRow2>()),
        (&current::MIB_IPFORWARD_TABLE2, size_of::<RawMibIpforwardTable2>()),
    ];

    for (record, size) in sizes {
        if record.size != size {
            tracing::error!(record = record.name, expected = record.size, actual = size, "layout mismatch");
            return Err(MarshalError::malformed(
                record.name,
                format!("compiled size is {size}, expected {}", record.size),
            ));
        }
    }

    let table = &current::MIB_IPFORWARD_TABLE2;
    let expected = table.offset("Table")?;
    let actual = offset_of!(RawMibIpforwardTable2, table);
    if expected != actual {
        return Err(MarshalError::malformed(
            table.name,
            format!("Table is at offset {actual}, expected {expected}"),
        ));
    }

    tracing::trace!("native layouts verified");
    Ok(())
}
