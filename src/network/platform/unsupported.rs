//! Stand-ins for hosts without the IP Helper API.

use crate::network::{
    Adapter, AdapterFetcher, AdapterQuery, FetchError, IpVersion, Route, RouteData, RouteTable,
};

/// [`AdapterFetcher`] that always fails with [`FetchError::Platform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedFetcher {
    query: AdapterQuery,
}

impl UnsupportedFetcher {
    /// Accepts a query for signature parity with the Windows fetcher.
    #[must_use]
    pub const fn new(query: AdapterQuery) -> Self {
        Self { query }
    }

    /// Returns the query this fetcher was built with.
    #[must_use]
    pub const fn query(&self) -> AdapterQuery {
        self.query
    }
}

impl AdapterFetcher for UnsupportedFetcher {
    fn fetch(&self) -> Result<Vec<Adapter>, FetchError> {
        Err(FetchError::unsupported_platform())
    }
}

/// [`RouteTable`] that always fails with [`FetchError::Platform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRouteTable;

impl UnsupportedRouteTable {
    /// Creates the stand-in table.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RouteTable for UnsupportedRouteTable {
    fn routes(&self, _luid: Option<u64>, _version: IpVersion) -> Result<Vec<Route>, FetchError> {
        Err(FetchError::unsupported_platform())
    }

    fn add_route(&self, _luid: u64, _data: &RouteData) -> Result<(), FetchError> {
        Err(FetchError::unsupported_platform())
    }

    fn delete_route(&self, _luid: u64, _data: &RouteData) -> Result<(), FetchError> {
        Err(FetchError::unsupported_platform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_reports_platform_error() {
        let err = UnsupportedFetcher::new(AdapterQuery::full()).fetch().unwrap_err();
        assert!(matches!(err, FetchError::Platform { .. }));
        assert!(err.to_string().contains(std::env::consts::OS));
    }

    #[test]
    fn lookups_report_platform_error() {
        let fetcher = UnsupportedFetcher::default();
        assert!(fetcher.find_by_luid(1).is_err());
        assert!(fetcher.find_by_index(1).is_err());
    }

    #[test]
    fn route_operations_report_platform_error() {
        let table = UnsupportedRouteTable::new();
        let data = RouteData::on_link("10.0.0.0/8".parse().unwrap(), 1);

        assert!(table.routes(None, IpVersion::Both).is_err());
        assert!(table.find_route(Some(1), &data.destination).is_err());
        assert!(matches!(
            table.add_route(1, &data),
            Err(FetchError::Platform { .. })
        ));
        assert!(table.delete_route(1, &data).is_err());
    }
}
