//! Reader for `Win32_NetworkAdapterConfiguration` objects.
//!
//! Objects are consumed through [`PropertySource`], so the reader works the
//! same over a live WMI object or an in-memory map. Querying WMI itself is
//! left to the caller.
//!
//! # Parallel arrays
//!
//! `DefaultIPGateway`/`GatewayCostMetric` and `IPAddress`/`IPSubnet` are
//! paired entry by entry. Any disagreement between the two is reported as
//! [`ConfigurationError::MismatchedArrays`] rather than truncated.
//!
//! # Writes
//!
//! [`set_dns_servers`] drives `SetDNSServerSearchOrder` through
//! [`MethodSource`], the method-call counterpart of [`PropertySource`].

mod dns;
mod error;
mod property;
mod reader;

#[cfg(test)]
mod reader_tests;

pub use dns::set_dns_servers;
pub use error::ConfigurationError;
pub use property::{MethodSource, PropertySource, PropertyValue};
pub use reader::{
    GatewayCost, NetworkAdapterConfiguration, find_configuration, read_configuration,
    read_configurations,
};
