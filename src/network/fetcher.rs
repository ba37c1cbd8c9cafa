//! Fetching traits, query options and error types.

use ipnet::IpNet;
use thiserror::Error;

use super::{Adapter, IpVersion, Route, RouteData};
use crate::marshal::MarshalError;

/// Win32 status code for "access denied".
pub const ERROR_ACCESS_DENIED: u32 = 5;

/// Error type for fetching and route-table operations.
///
/// Describes what went wrong without dictating recovery strategy. Nothing in
/// this crate retries a failed system call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A system call returned a failure status.
    #[error("{function} failed with status {code}")]
    SystemCall {
        /// Name of the failing system call.
        function: &'static str,
        /// Native status code, verbatim.
        code: u32,
    },

    /// Permission denied to access or change network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// The returned native data could not be converted.
    #[error("Failed to read native data: {0}")]
    Marshal(#[from] MarshalError),

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

impl FetchError {
    /// Maps a failing native status to an error, singling out access denial.
    #[must_use]
    pub fn from_status(function: &'static str, code: u32) -> Self {
        if code == ERROR_ACCESS_DENIED {
            Self::PermissionDenied {
                context: format!("{function} requires elevated privileges"),
            }
        } else {
            Self::SystemCall { function, code }
        }
    }

    /// Error returned on hosts without the IP Helper API.
    #[must_use]
    pub fn unsupported_platform() -> Self {
        Self::Platform {
            message: format!("IP Helper is not available on {}", std::env::consts::OS),
        }
    }
}

/// Which parts of the adapter list to request.
///
/// Maps onto the `GAA_FLAG_*` flags of `GetAdaptersAddresses`. The default
/// requests what the call returns with no flags set.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdapterQuery {
    /// Address family selection.
    pub ip_version: Option<IpVersion>,
    /// `GAA_FLAG_INCLUDE_PREFIX`.
    pub include_prefixes: bool,
    /// `GAA_FLAG_INCLUDE_GATEWAYS`.
    pub include_gateways: bool,
    /// `GAA_FLAG_INCLUDE_WINS_INFO`.
    pub include_wins: bool,
    /// `GAA_FLAG_INCLUDE_ALL_INTERFACES`.
    pub include_all_interfaces: bool,
    /// `GAA_FLAG_SKIP_ANYCAST`.
    pub skip_anycast: bool,
    /// `GAA_FLAG_SKIP_MULTICAST`.
    pub skip_multicast: bool,
    /// `GAA_FLAG_SKIP_DNS_SERVER`.
    pub skip_dns_servers: bool,
}

/// `GAA_FLAG_SKIP_ANYCAST`.
pub const GAA_FLAG_SKIP_ANYCAST: u32 = 0x0002;
/// `GAA_FLAG_SKIP_MULTICAST`.
pub const GAA_FLAG_SKIP_MULTICAST: u32 = 0x0004;
/// `GAA_FLAG_SKIP_DNS_SERVER`.
pub const GAA_FLAG_SKIP_DNS_SERVER: u32 = 0x0008;
/// `GAA_FLAG_INCLUDE_PREFIX`.
pub const GAA_FLAG_INCLUDE_PREFIX: u32 = 0x0010;
/// `GAA_FLAG_INCLUDE_WINS_INFO`.
pub const GAA_FLAG_INCLUDE_WINS_INFO: u32 = 0x0040;
/// `GAA_FLAG_INCLUDE_GATEWAYS`.
pub const GAA_FLAG_INCLUDE_GATEWAYS: u32 = 0x0080;
/// `GAA_FLAG_INCLUDE_ALL_INTERFACES`.
pub const GAA_FLAG_INCLUDE_ALL_INTERFACES: u32 = 0x0100;

impl AdapterQuery {
    /// Requests everything the call can report.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            ip_version: None,
            include_prefixes: true,
            include_gateways: true,
            include_wins: true,
            include_all_interfaces: false,
            skip_anycast: false,
            skip_multicast: false,
            skip_dns_servers: false,
        }
    }

    /// Returns the `GAA_FLAG_*` bit set for this query.
    #[must_use]
    pub const fn flags(self) -> u32 {
        let mut flags = 0;
        if self.skip_anycast {
            flags |= GAA_FLAG_SKIP_ANYCAST;
        }
        if self.skip_multicast {
            flags |= GAA_FLAG_SKIP_MULTICAST;
        }
        if self.skip_dns_servers {
            flags |= GAA_FLAG_SKIP_DNS_SERVER;
        }
        if self.include_prefixes {
            flags |= GAA_FLAG_INCLUDE_PREFIX;
        }
        if self.include_wins {
            flags |= GAA_FLAG_INCLUDE_WINS_INFO;
        }
        if self.include_gateways {
            flags |= GAA_FLAG_INCLUDE_GATEWAYS;
        }
        if self.include_all_interfaces {
            flags |= GAA_FLAG_INCLUDE_ALL_INTERFACES;
        }
        flags
    }

    /// Returns the address family to pass to the call.
    #[must_use]
    pub const fn address_family(self) -> u16 {
        match self.ip_version {
            Some(version) => version.address_family(),
            None => IpVersion::Both.address_family(),
        }
    }
}

/// Trait for fetching network adapter information.
///
/// Enables dependency injection for testing with mock implementations.
pub trait AdapterFetcher: Send + Sync {
    /// Fetches the current state of all network adapters.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the system call fails or its result
    /// cannot be converted. A failed conversion never yields a partial list.
    fn fetch(&self) -> Result<Vec<Adapter>, FetchError>;

    /// Finds the adapter with the given luid.
    ///
    /// # Errors
    ///
    /// Propagates [`AdapterFetcher::fetch`] errors.
    fn find_by_luid(&self, luid: u64) -> Result<Option<Adapter>, FetchError> {
        Ok(self.fetch()?.into_iter().find(|a| a.luid == luid))
    }

    /// Finds the adapter with the given IPv4 or IPv6 interface index.
    ///
    /// # Errors
    ///
    /// Propagates [`AdapterFetcher::fetch`] errors.
    fn find_by_index(&self, index: u32) -> Result<Option<Adapter>, FetchError> {
        Ok(self
            .fetch()?
            .into_iter()
            .find(|a| a.if_index == index || a.ipv6_if_index == index))
    }
}

/// Trait over the IP forwarding table.
///
/// A `luid` of `None` addresses every interface.
pub trait RouteTable: Send + Sync {
    /// Lists routes of one family (or both), optionally for one interface.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the table cannot be read or converted.
    fn routes(&self, luid: Option<u64>, version: IpVersion) -> Result<Vec<Route>, FetchError>;

    /// Finds the route to exactly `destination` on the given interface.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteTable::routes`] errors.
    fn find_route(&self, luid: Option<u64>, destination: &IpNet) -> Result<Option<Route>, FetchError> {
        Ok(self
            .routes(luid, IpVersion::Both)?
            .into_iter()
            .find(|route| route.has_destination(destination)))
    }

    /// Adds a route on the given interface.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::SystemCall`] (or `PermissionDenied`) on failure.
    fn add_route(&self, luid: u64, data: &RouteData) -> Result<(), FetchError>;

    /// Deletes a route from the given interface.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::SystemCall`] (or `PermissionDenied`) on failure.
    fn delete_route(&self, luid: u64, data: &RouteData) -> Result<(), FetchError>;
}
