//! Network layer: typed adapters, addresses and routes.
//!
//! This module provides:
//! - Value types decoded from the IP Helper records ([`Adapter`], [`Route`])
//! - Native enumerations with an `Other` escape hatch ([`OperStatus`] and friends)
//! - Record conversion from raw mirrors ([`convert`])
//! - Fetching and route table traits ([`AdapterFetcher`], [`RouteTable`])
//! - Adapter filtering ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod address;
mod codes;
pub mod convert;
mod fetcher;
pub mod filter;
pub mod platform;
mod route;


pub use adapter::{
    ADAPTER_FLAG_DHCP_ENABLED, ADAPTER_FLAG_IPV4_ENABLED, ADAPTER_FLAG_IPV6_ENABLED,
    ADAPTER_FLAG_RECEIVE_ONLY, Adapter, AdapterKind, Guid, IF_TYPE_ETHERNET_CSMACD,
    IF_TYPE_IEEE80211, IF_TYPE_PPP, IF_TYPE_SOFTWARE_LOOPBACK, IF_TYPE_TUNNEL, IpVersion,
};
pub use address::{
    ADDRESS_FLAG_DNS_ELIGIBLE, ADDRESS_FLAG_TRANSIENT, AdapterAddress, AdapterPrefix,
    UnicastAddress,
};
pub use codes::{
    ConnectionType, DadState, OperStatus, PrefixOrigin, RouteOrigin, RouteProtocol, SuffixOrigin,
    TunnelType,
};
pub use fetcher::{
    AdapterFetcher, AdapterQuery, ERROR_ACCESS_DENIED, FetchError, GAA_FLAG_INCLUDE_ALL_INTERFACES,
    GAA_FLAG_INCLUDE_GATEWAYS, GAA_FLAG_INCLUDE_PREFIX, GAA_FLAG_INCLUDE_WINS_INFO,
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST, RouteTable,
};
pub use route::{Route, RouteData};
