//! winipcfg: typed access to the Windows IP Helper API
//!
//! A library for reading network adapters, addresses and IP routes through
//! `GetAdaptersAddresses` and the `*IpForward*2` functions, with the native
//! records decoded into owned Rust values.
//!
//! - [`marshal`]: layout descriptors, raw record mirrors and buffer walkers
//! - [`network`]: value types, converters, fetchers and filters
//! - [`wmi`]: `Win32_NetworkAdapterConfiguration` reader
//! - [`config`]: CLI and configuration file handling for the binary

pub mod config;
pub mod marshal;
pub mod network;
pub mod wmi;
