//! Forwarding-table route types.

use std::net::IpAddr;

use ipnet::IpNet;
use serde::Serialize;

use super::codes::{RouteOrigin, RouteProtocol};
use crate::marshal::raw::{RawIpAddressPrefix, RawMibIpforwardRow2, RawSockaddrInet};

/// One row of the IP forwarding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub interface_luid: u64,
    pub interface_index: u32,
    pub destination: IpNet,
    /// Unspecified (`0.0.0.0` / `::`) for on-link routes.
    pub next_hop: IpAddr,
    pub site_prefix_length: u8,
    /// Seconds; `u32::MAX` means infinite.
    pub valid_lifetime: u32,
    /// Seconds; `u32::MAX` means infinite.
    pub preferred_lifetime: u32,
    pub metric: u32,
    pub protocol: RouteProtocol,
    pub loopback: bool,
    pub autoconfigure_address: bool,
    pub publish: bool,
    pub immortal: bool,
    /// Seconds since the route was installed.
    pub age: u32,
    pub origin: RouteOrigin,
}

impl Route {
    /// Returns the caller-facing part of this route.
    #[must_use]
    pub const fn route_data(&self) -> RouteData {
        RouteData {
            destination: self.destination,
            next_hop: self.next_hop,
            metric: self.metric,
        }
    }

    /// Returns true if this route's destination is exactly `destination`.
    ///
    /// Host bits of `destination` are ignored, so `10.1.2.3/8` selects the
    /// `10.0.0.0/8` route.
    #[must_use]
    pub fn has_destination(&self, destination: &IpNet) -> bool {
        self.destination.prefix_len() == destination.prefix_len()
            && self.destination.trunc() == destination.trunc()
    }
}

/// Destination, next hop and metric of a route to add or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteData {
    pub destination: IpNet,
    pub next_hop: IpAddr,
    pub metric: u32,
}

impl RouteData {
    /// Creates route data.
    #[must_use]
    pub const fn new(destination: IpNet, next_hop: IpAddr, metric: u32) -> Self {
        Self {
            destination,
            next_hop,
            metric,
        }
    }

    /// Creates an on-link route (unspecified next hop of the destination's family).
    #[must_use]
    pub const fn on_link(destination: IpNet, metric: u32) -> Self {
        let next_hop = match destination {
            IpNet::V4(_) => IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
            IpNet::V6(_) => IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED),
        };
        Self::new(destination, next_hop, metric)
    }
}

impl RawMibIpforwardRow2 {
    /// Writes `data` into a row prepared by `InitializeIpForwardEntry`.
    ///
    /// Only the destination, next hop and metric are touched, and the luid
    /// is set to `interface_luid`; every other field keeps its initialized
    /// default.
    pub fn apply_route(&mut self, interface_luid: u64, data: &RouteData) {
        self.interface_luid = interface_luid;
        self.destination_prefix = RawIpAddressPrefix::from(data.destination);
        self.next_hop = RawSockaddrInet::from(data.next_hop);
        self.metric = data.metric;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(destination: &str, next_hop: &str) -> Route {
        Route {
            interface_luid: 0x0006_0000_0100_0000,
            interface_index: 12,
            destination: destination.parse().unwrap(),
            next_hop: next_hop.parse().unwrap(),
            site_prefix_length: 0,
            valid_lifetime: u32::MAX,
            preferred_lifetime: u32::MAX,
            metric: 25,
            protocol: RouteProtocol::NetMgmt,
            loopback: false,
            autoconfigure_address: false,
            publish: false,
            immortal: false,
            age: 3600,
            origin: RouteOrigin::Manual,
        }
    }

    #[test]
    fn route_data_extracts_destination_hop_and_metric() {
        let data = route("0.0.0.0/0", "192.168.1.1").route_data();
        assert_eq!(
            data,
            RouteData::new("0.0.0.0/0".parse().unwrap(), "192.168.1.1".parse().unwrap(), 25)
        );
    }

    #[test]
    fn has_destination_requires_same_prefix_length() {
        let r = route("10.0.0.0/8", "0.0.0.0");
        assert!(r.has_destination(&"10.0.0.0/8".parse().unwrap()));
        assert!(!r.has_destination(&"10.0.0.0/16".parse().unwrap()));
    }

    #[test]
    fn has_destination_ignores_host_bits() {
        let r = route("10.0.0.0/8", "0.0.0.0");
        assert!(r.has_destination(&"10.1.2.3/8".parse().unwrap()));
        assert!(!r.has_destination(&"11.0.0.0/8".parse().unwrap()));
    }

    #[test]
    fn on_link_uses_unspecified_next_hop_of_same_family() {
        let v6 = RouteData::on_link("2001:db8::/32".parse().unwrap(), 10);
        assert_eq!(v6.next_hop, "::".parse::<IpAddr>().unwrap());
        let v4 = RouteData::on_link("10.0.0.0/8".parse().unwrap(), 10);
        assert_eq!(v4.next_hop, "0.0.0.0".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn apply_route_fills_key_fields_only() {
        let mut row = RawMibIpforwardRow2 {
            valid_lifetime: u32::MAX,
            protocol: RouteProtocol::NetMgmt.code(),
            ..RawMibIpforwardRow2::default()
        };
        let data = RouteData::new(
            "fd00::/8".parse().unwrap(),
            "fe80::1".parse().unwrap(),
            7,
        );

        row.apply_route(42, &data);

        assert_eq!(row.interface_luid, 42);
        assert_eq!(row.destination_prefix.to_ip_net(), Ok(data.destination));
        assert_eq!(row.next_hop.to_ip_addr(), Ok(data.next_hop));
        assert_eq!(row.metric, 7);
        assert_eq!(row.valid_lifetime, u32::MAX);
        assert_eq!(row.protocol, 3);
    }
}
