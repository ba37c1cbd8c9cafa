//! Windows implementations over the IP Helper API.
//!
//! Native buffers are handed to the marshal layer as raw mirrors; nothing
//! here reads a native structure field by field.

use std::ptr;

use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, ERROR_NO_DATA, NO_ERROR, WIN32_ERROR};
use windows::Win32::NetworkManagement::IpHelper::{
    CreateIpForwardEntry2, DeleteIpForwardEntry2, FreeMibTable, GET_ADAPTERS_ADDRESSES_FLAGS,
    GetAdaptersAddresses, GetIpForwardTable2, IP_ADAPTER_ADDRESSES_LH, InitializeIpForwardEntry,
    MIB_IPFORWARD_ROW2, MIB_IPFORWARD_TABLE2,
};
use windows::Win32::Networking::WinSock::ADDRESS_FAMILY;

use crate::marshal::raw::{RawIpAdapterAddresses, RawMibIpforwardRow2, RawMibIpforwardTable2};
use crate::marshal::verify_layouts;
use crate::network::convert::{collect_adapters, collect_routes};
use crate::network::{
    Adapter, AdapterFetcher, AdapterQuery, FetchError, IpVersion, Route, RouteData, RouteTable,
};

/// Buffer size hint for `GetAdaptersAddresses`, in bytes.
const INITIAL_BUFFER_SIZE: u32 = 15 * 1024;

/// Calls made with a size the previous call reported.
const MAX_FETCH_ATTEMPTS: usize = 3;

/// Maps a `WIN32_ERROR` onto `Ok` or a [`FetchError`] naming the call.
fn check(function: &'static str, status: WIN32_ERROR) -> Result<(), FetchError> {
    if status == NO_ERROR {
        Ok(())
    } else {
        Err(FetchError::from_status(function, status.0))
    }
}

/// [`AdapterFetcher`] backed by `GetAdaptersAddresses`.
///
/// # Example
///
/// ```no_run
/// use winipcfg::network::{AdapterFetcher, AdapterQuery, platform::WindowsFetcher};
///
/// let fetcher = WindowsFetcher::new(AdapterQuery::full());
/// for adapter in fetcher.fetch()? {
///     println!("{} {:?}", adapter.friendly_name, adapter.ipv4_addresses());
/// }
/// # Ok::<(), winipcfg::network::FetchError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFetcher {
    query: AdapterQuery,
}

impl WindowsFetcher {
    /// Creates a fetcher issuing the given query.
    #[must_use]
    pub const fn new(query: AdapterQuery) -> Self {
        Self { query }
    }

    /// Returns the query this fetcher issues.
    #[must_use]
    pub const fn query(&self) -> AdapterQuery {
        self.query
    }
}

impl AdapterFetcher for WindowsFetcher {
    fn fetch(&self) -> Result<Vec<Adapter>, FetchError> {
        verify_layouts()?;

        let Some(buffer) = adapter_buffer(self.query)? else {
            tracing::debug!("GetAdaptersAddresses reported no adapters");
            return Ok(Vec::new());
        };

        // SAFETY: the buffer is 8-byte aligned, was filled by the call and
        // outlives the conversion; the list head sits at its start.
        let adapters = unsafe { collect_adapters(buffer.as_ptr().cast::<RawIpAdapterAddresses>()) }?;
        tracing::debug!(count = adapters.len(), "fetched adapters");
        Ok(adapters)
    }
}

/// Runs the two-call size protocol of `GetAdaptersAddresses`.
///
/// Returns `None` for `ERROR_NO_DATA`. The buffer is a `Vec<u64>` so the
/// records inside are 8-byte aligned.
#[cfg(not(tarpaulin_include))]
fn adapter_buffer(query: AdapterQuery) -> Result<Option<Vec<u64>>, FetchError> {
    let family = u32::from(query.address_family());
    let flags = GET_ADAPTERS_ADDRESSES_FLAGS(query.flags());
    let mut size = INITIAL_BUFFER_SIZE;

    for attempt in 1..=MAX_FETCH_ATTEMPTS {
        let mut buffer = vec![0u64; (size as usize).div_ceil(size_of::<u64>())];
        tracing::trace!(attempt, size, "GetAdaptersAddresses");

        // SAFETY: the buffer holds at least `size` writable bytes.
        let status = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>()),
                &raw mut size,
            )
        };

        match WIN32_ERROR(status) {
            NO_ERROR => return Ok(Some(buffer)),
            ERROR_NO_DATA => return Ok(None),
            ERROR_BUFFER_OVERFLOW => {}
            other => return Err(FetchError::from_status("GetAdaptersAddresses", other.0)),
        }
    }

    tracing::warn!(size, "adapter list kept growing between calls");
    Err(FetchError::from_status(
        "GetAdaptersAddresses",
        ERROR_BUFFER_OVERFLOW.0,
    ))
}

/// Owns a table returned by `GetIpForwardTable2`.
///
/// Dropping the guard frees the table exactly once.
struct MibTable {
    table: *mut MIB_IPFORWARD_TABLE2,
}

impl MibTable {
    fn fetch(version: IpVersion) -> Result<Self, FetchError> {
        let mut table: *mut MIB_IPFORWARD_TABLE2 = ptr::null_mut();
        tracing::trace!(?version, "GetIpForwardTable2");

        // SAFETY: `table` is a valid out pointer; on success the system owns
        // the allocation until FreeMibTable.
        let status =
            unsafe { GetIpForwardTable2(ADDRESS_FAMILY(version.address_family()), &raw mut table) };

        // Guard first: a table handed back with a failure status is still freed.
        Self::guard(table, status)
    }

    fn guard(table: *mut MIB_IPFORWARD_TABLE2, status: WIN32_ERROR) -> Result<Self, FetchError> {
        let guard = Self { table };
        check("GetIpForwardTable2", status).map(|()| guard)
    }

    fn routes(&self, luid: Option<u64>) -> Result<Vec<Route>, FetchError> {
        // SAFETY: the table stays allocated while `self` lives, and the
        // mirror's layout was verified against the native one.
        let routes = unsafe { collect_routes(self.table.cast::<RawMibIpforwardTable2>(), luid) }?;
        Ok(routes)
    }
}

impl Drop for MibTable {
    fn drop(&mut self) {
        if !self.table.is_null() {
            // SAFETY: the pointer came from GetIpForwardTable2 and is freed once.
            unsafe { FreeMibTable(self.table.cast::<std::ffi::c_void>().cast_const()) };
        }
    }
}

/// [`RouteTable`] backed by the IP forwarding table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsRouteTable;

impl WindowsRouteTable {
    /// Creates a route table handle.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn row_for(luid: u64, data: &RouteData) -> RawMibIpforwardRow2 {
        let mut row = RawMibIpforwardRow2::default();
        // SAFETY: the mirror has the native size and at least its alignment.
        unsafe { InitializeIpForwardEntry(ptr::from_mut(&mut row).cast::<MIB_IPFORWARD_ROW2>()) };
        row.apply_route(luid, data);
        row
    }
}

impl RouteTable for WindowsRouteTable {
    fn routes(&self, luid: Option<u64>, version: IpVersion) -> Result<Vec<Route>, FetchError> {
        verify_layouts()?;
        let table = MibTable::fetch(version)?;
        let routes = table.routes(luid)?;
        tracing::debug!(count = routes.len(), ?luid, "read forwarding table");
        Ok(routes)
    }

    fn add_route(&self, luid: u64, data: &RouteData) -> Result<(), FetchError> {
        verify_layouts()?;
        let row = Self::row_for(luid, data);
        tracing::debug!(luid, destination = %data.destination, next_hop = %data.next_hop, "adding route");

        // SAFETY: `row` is an initialized, layout-verified MIB_IPFORWARD_ROW2.
        let status = unsafe { CreateIpForwardEntry2(ptr::from_ref(&row).cast::<MIB_IPFORWARD_ROW2>()) };
        check("CreateIpForwardEntry2", status)
    }

    fn delete_route(&self, luid: u64, data: &RouteData) -> Result<(), FetchError> {
        verify_layouts()?;
        let row = Self::row_for(luid, data);
        tracing::debug!(luid, destination = %data.destination, "deleting route");

        // SAFETY: as in `add_route`.
        let status = unsafe { DeleteIpForwardEntry2(ptr::from_ref(&row).cast::<MIB_IPFORWARD_ROW2>()) };
        check("DeleteIpForwardEntry2", status)
    }
}
