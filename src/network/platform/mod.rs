//! Platform-specific fetcher and route table implementations.
//!
//! # Platform Support
//!
//! - **Windows**: `GetAdaptersAddresses` and the `*IpForward*2` family via
//!   the `windows` crate.
//! - **Other hosts**: every call returns [`FetchError::Platform`].
//!
//! [`FetchError::Platform`]: crate::network::FetchError::Platform

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unsupported;

#[cfg(windows)]
pub use windows::{WindowsFetcher, WindowsRouteTable};

#[cfg(windows)]
pub use windows::{WindowsFetcher as PlatformFetcher, WindowsRouteTable as PlatformRouteTable};

#[cfg(not(windows))]
pub use unsupported::{UnsupportedFetcher as PlatformFetcher, UnsupportedRouteTable as PlatformRouteTable};
