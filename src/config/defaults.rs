//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::network::{AdapterQuery, IpVersion};

/// Default output path for `winipcfg init`.
pub const CONFIG_FILE: &str = "winipcfg.toml";

/// Default address family.
pub const IP_VERSION: IpVersion = IpVersion::Both;

/// Request on-link prefixes by default.
pub const INCLUDE_PREFIXES: bool = true;

/// Request gateway addresses by default.
pub const INCLUDE_GATEWAYS: bool = true;

/// Pretty-print JSON output by default.
pub const PRETTY: bool = true;

/// Default adapter query: prefixes and gateways, nothing skipped.
#[must_use]
pub const fn query() -> AdapterQuery {
    AdapterQuery {
        ip_version: Some(IP_VERSION),
        include_prefixes: INCLUDE_PREFIXES,
        include_gateways: INCLUDE_GATEWAYS,
        include_wins: false,
        include_all_interfaces: false,
        skip_anycast: false,
        skip_multicast: false,
        skip_dns_servers: false,
    }
}
