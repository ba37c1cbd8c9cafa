//! Structural converters from native records to owned values.
//!
//! Records that point at other native memory implement [`ReadRecord`],
//! whose `read` is `unsafe` because it follows those pointers. The
//! pointer-free forwarding row converts through `TryFrom`.
//!
//! Every converter copies what it needs out of the native buffer before
//! returning. Nothing here frees native memory; the caller owns the buffer
//! and releases it after the walk.

use std::net::IpAddr;

use crate::marshal::layout::current;
use crate::marshal::raw::{
    LinkedRecord, RawIpAdapterAddresses, RawIpAdapterAnycastAddress,
    RawIpAdapterDnsServerAddress, RawIpAdapterDnsSuffix, RawIpAdapterGatewayAddress,
    RawIpAdapterMulticastAddress, RawIpAdapterPrefix, RawIpAdapterUnicastAddress,
    RawIpAdapterWinsServerAddress, RawMibIpforwardRow2, RawMibIpforwardTable2, RawSocketAddress,
};
use crate::marshal::strings::{ansi_ptr_to_string, utf16_fixed_to_string, utf16_ptr_to_string};
use crate::marshal::{MarshalError, collect_contiguous, collect_linked};

use super::address::{AdapterAddress, AdapterPrefix, UnicastAddress};
use super::adapter::{Adapter, Guid};
use super::codes::{
    ConnectionType, DadState, OperStatus, PrefixOrigin, RouteOrigin, RouteProtocol, SuffixOrigin,
    TunnelType,
};
use super::route::Route;

/// Conversion of one native record into its owned value.
pub trait ReadRecord {
    /// The owned value produced.
    type Value;

    /// Reads this record, following any pointers it holds.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] if any part of the record cannot be decoded.
    ///
    /// # Safety
    ///
    /// Every pointer reachable from `self` must be null or valid for reads
    /// for the duration of the call.
    unsafe fn read(&self) -> Result<Self::Value, MarshalError>;
}

/// Reads a possibly-null record.
///
/// # Errors
///
/// Propagates the record's conversion error.
///
/// # Safety
///
/// A non-null `ptr` must point to a valid `T` satisfying [`ReadRecord::read`].
pub unsafe fn convert_nullable<T: ReadRecord>(ptr: *const T) -> Result<Option<T::Value>, MarshalError> {
    // SAFETY: non-null and valid per the caller's contract.
    match unsafe { ptr.as_ref() } {
        None => Ok(None),
        // SAFETY: forwarded from the caller.
        Some(record) => unsafe { record.read() }.map(Some),
    }
}

/// Reads every node of a native linked list.
///
/// # Errors
///
/// Propagates the first conversion error; no partial list is returned.
///
/// # Safety
///
/// Every node reachable from `head` must be valid and satisfy
/// [`ReadRecord::read`].
pub unsafe fn read_list<T>(head: *const T) -> Result<Vec<T::Value>, MarshalError>
where
    T: ReadRecord + LinkedRecord,
{
    // SAFETY: each node handed to `read` is reachable from `head`.
    let read = |node: &T| unsafe { node.read() };
    // SAFETY: forwarded from the caller.
    unsafe { collect_linked(head, read) }
}

/// Reads the adapter list returned by `GetAdaptersAddresses`.
///
/// # Errors
///
/// Propagates the first conversion error.
///
/// # Safety
///
/// `head` must be null or the head of a list produced by the system call,
/// with its buffer alive for the duration of the call.
pub unsafe fn collect_adapters(head: *const RawIpAdapterAddresses) -> Result<Vec<Adapter>, MarshalError> {
    // SAFETY: forwarded from the caller.
    let adapters = unsafe { read_list(head) }?;
    tracing::debug!(count = adapters.len(), "converted adapter list");
    Ok(adapters)
}

/// Reads the rows of a `MIB_IPFORWARD_TABLE2`.
///
/// Rows are located from the descriptor: the array starts at the `Table`
/// offset and rows are `MIB_IPFORWARD_ROW2` bytes apart. With a luid filter
/// only rows of that interface are decoded. A null table yields no routes.
///
/// # Errors
///
/// Propagates the first conversion error of a selected row.
///
/// # Safety
///
/// `table` must be null or point to a table whose `num_entries` rows are
/// all readable for the duration of the call.
pub unsafe fn collect_routes(
    table: *const RawMibIpforwardTable2,
    luid: Option<u64>,
) -> Result<Vec<Route>, MarshalError> {
    if table.is_null() {
        return Ok(Vec::new());
    }

    let table_offset = current::MIB_IPFORWARD_TABLE2.offset("Table")?;
    let stride = current::MIB_IPFORWARD_ROW2.size;

    // SAFETY: non-null and readable per the caller's contract.
    let count = unsafe { (*table).num_entries };
    let count = usize::try_from(count)
        .map_err(|_| MarshalError::malformed("MIB_IPFORWARD_TABLE2", format!("{count} rows")))?;

    // SAFETY: the row array lies inside the table allocation.
    let first = unsafe { table.cast::<u8>().add(table_offset) }.cast::<RawMibIpforwardRow2>();

    // SAFETY: forwarded from the caller.
    let selected = unsafe {
        collect_contiguous("MIB_IPFORWARD_ROW2", first, count, stride, |row| {
            if luid.is_some_and(|luid| row.interface_luid != luid) {
                return Ok(None);
            }
            Route::try_from(row).map(Some)
        })
    }?;

    let routes: Vec<Route> = selected.into_iter().flatten().collect();
    tracing::debug!(rows = count, selected = routes.len(), "converted forwarding table");
    Ok(routes)
}

impl TryFrom<&RawMibIpforwardRow2> for Route {
    type Error = MarshalError;

    fn try_from(row: &RawMibIpforwardRow2) -> Result<Self, Self::Error> {
        Ok(Self {
            interface_luid: row.interface_luid,
            interface_index: row.interface_index,
            destination: row.destination_prefix.to_ip_net()?,
            next_hop: row.next_hop.to_ip_addr()?,
            site_prefix_length: row.site_prefix_length,
            valid_lifetime: row.valid_lifetime,
            preferred_lifetime: row.preferred_lifetime,
            metric: row.metric,
            protocol: RouteProtocol::from_code(row.protocol),
            loopback: row.loopback != 0,
            autoconfigure_address: row.autoconfigure_address != 0,
            publish: row.publish != 0,
            immortal: row.immortal != 0,
            age: row.age,
            origin: RouteOrigin::from_code(row.origin),
        })
    }
}

/// Decodes an address that the record must carry.
///
/// # Safety
///
/// See [`RawSocketAddress::decode`].
unsafe fn required_address(record: &'static str, address: &RawSocketAddress) -> Result<IpAddr, MarshalError> {
    // SAFETY: forwarded from the caller.
    unsafe { address.decode() }?
        .map(|addr| addr.ip())
        .ok_or_else(|| MarshalError::malformed(record, "Address has a null lpSockaddr"))
}

/// Decodes an address that may be absent.
///
/// # Safety
///
/// See [`RawSocketAddress::decode`].
unsafe fn optional_address(address: &RawSocketAddress) -> Result<Option<IpAddr>, MarshalError> {
    // SAFETY: forwarded from the caller.
    Ok(unsafe { address.decode() }?.map(|addr| addr.ip()))
}

/// Copies the first `length` bytes of a fixed array.
fn trimmed(record: &'static str, field: &str, bytes: &[u8], length: u32) -> Result<Vec<u8>, MarshalError> {
    usize::try_from(length)
        .ok()
        .and_then(|length| bytes.get(..length))
        .map(<[u8]>::to_vec)
        .ok_or_else(|| {
            MarshalError::malformed(
                record,
                format!("{field} length {length} exceeds {} bytes", bytes.len()),
            )
        })
}

impl ReadRecord for RawIpAdapterUnicastAddress {
    type Value = UnicastAddress;

    unsafe fn read(&self) -> Result<UnicastAddress, MarshalError> {
        Ok(UnicastAddress {
            // SAFETY: forwarded from the caller.
            address: unsafe { required_address(Self::NAME, &self.address) }?,
            flags: self.flags,
            prefix_origin: PrefixOrigin::from_code(self.prefix_origin),
            suffix_origin: SuffixOrigin::from_code(self.suffix_origin),
            dad_state: DadState::from_code(self.dad_state),
            valid_lifetime: self.valid_lifetime,
            preferred_lifetime: self.preferred_lifetime,
            lease_lifetime: self.lease_lifetime,
            on_link_prefix_length: self.on_link_prefix_length,
        })
    }
}

macro_rules! read_address_with_flags {
    ($($ty:ty),+) => {
        $(
            impl ReadRecord for $ty {
                type Value = AdapterAddress;

                unsafe fn read(&self) -> Result<AdapterAddress, MarshalError> {
                    Ok(AdapterAddress {
                        // SAFETY: forwarded from the caller.
                        address: unsafe { required_address(Self::NAME, &self.address) }?,
                        flags: self.flags,
                    })
                }
            }
        )+
    };
}

read_address_with_flags!(RawIpAdapterAnycastAddress, RawIpAdapterMulticastAddress);

macro_rules! read_server_address {
    ($($ty:ty),+) => {
        $(
            impl ReadRecord for $ty {
                type Value = IpAddr;

                unsafe fn read(&self) -> Result<IpAddr, MarshalError> {
                    // SAFETY: forwarded from the caller.
                    unsafe { required_address(Self::NAME, &self.address) }
                }
            }
        )+
    };
}

read_server_address!(
    RawIpAdapterDnsServerAddress,
    RawIpAdapterWinsServerAddress,
    RawIpAdapterGatewayAddress
);

impl ReadRecord for RawIpAdapterPrefix {
    type Value = AdapterPrefix;

    unsafe fn read(&self) -> Result<AdapterPrefix, MarshalError> {
        Ok(AdapterPrefix {
            // SAFETY: forwarded from the caller.
            address: unsafe { required_address(Self::NAME, &self.address) }?,
            prefix_length: self.prefix_length,
            flags: self.flags,
        })
    }
}

impl ReadRecord for RawIpAdapterDnsSuffix {
    type Value = String;

    unsafe fn read(&self) -> Result<String, MarshalError> {
        Ok(utf16_fixed_to_string(&self.string))
    }
}

impl ReadRecord for RawIpAdapterAddresses {
    type Value = Adapter;

    unsafe fn read(&self) -> Result<Adapter, MarshalError> {
        // SAFETY (all blocks below): every pointer field comes from the same
        // system buffer, valid per the caller's contract.
        let adapter_name = unsafe { ansi_ptr_to_string(self.adapter_name) }?;
        let friendly_name = unsafe { utf16_ptr_to_string(self.friendly_name) }?;
        let description = unsafe { utf16_ptr_to_string(self.description) }?;
        let dns_suffix = unsafe { utf16_ptr_to_string(self.dns_suffix) }?;

        let adapter = Adapter {
            if_index: self.if_index,
            adapter_name: adapter_name.unwrap_or_default(),
            friendly_name: friendly_name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            dns_suffix: dns_suffix.unwrap_or_default(),
            unicast_addresses: unsafe { read_list(self.first_unicast_address) }?,
            anycast_addresses: unsafe { read_list(self.first_anycast_address) }?,
            multicast_addresses: unsafe { read_list(self.first_multicast_address) }?,
            dns_servers: unsafe { read_list(self.first_dns_server_address) }?,
            wins_servers: unsafe { read_list(self.first_wins_server_address) }?,
            gateways: unsafe { read_list(self.first_gateway_address) }?,
            prefixes: unsafe { read_list(self.first_prefix) }?,
            dns_suffixes: unsafe { read_list(self.first_dns_suffix) }?,
            physical_address: trimmed(
                Self::NAME,
                "PhysicalAddress",
                &self.physical_address,
                self.physical_address_length,
            )?,
            flags: self.flags,
            mtu: self.mtu,
            if_type: self.if_type,
            oper_status: OperStatus::from_code(self.oper_status),
            ipv6_if_index: self.ipv6_if_index,
            zone_indices: self.zone_indices,
            transmit_link_speed: self.transmit_link_speed,
            receive_link_speed: self.receive_link_speed,
            ipv4_metric: self.ipv4_metric,
            ipv6_metric: self.ipv6_metric,
            luid: self.luid,
            dhcpv4_server: unsafe { optional_address(&self.dhcpv4_server) }?,
            compartment_id: self.compartment_id,
            network_guid: Guid::from(self.network_guid),
            connection_type: ConnectionType::from_code(self.connection_type),
            tunnel_type: TunnelType::from_code(self.tunnel_type),
            dhcpv6_server: unsafe { optional_address(&self.dhcpv6_server) }?,
            dhcpv6_client_duid: trimmed(
                Self::NAME,
                "Dhcpv6ClientDuid",
                &self.dhcpv6_client_duid,
                self.dhcpv6_client_duid_length,
            )?,
            dhcpv6_iaid: self.dhcpv6_iaid,
        };

        tracing::trace!(
            name = %adapter.friendly_name,
            luid = adapter.luid,
            unicast = adapter.unicast_addresses.len(),
            "converted adapter"
        );
        Ok(adapter)
    }
}

