//! Command execution.
//!
//! Each subcommand fetches from the IP Helper API and writes the result as
//! JSON. The fetch and output steps are generic so tests can inject fakes.

use std::io::{self, Write};

use ipnet::IpNet;
use serde::Serialize;
use thiserror::Error;

use winipcfg::config::{Command, ValidatedConfig};
use winipcfg::marshal::{MarshalError, verify_layouts};
use winipcfg::network::filter::FilteredFetcher;
use winipcfg::network::platform::{PlatformFetcher, PlatformRouteTable};
use winipcfg::network::{AdapterFetcher, FetchError, IpVersion, RouteTable};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The record mirrors do not match the native layouts.
    #[error("Native layout check failed: {0}")]
    Layout(#[source] MarshalError),

    /// A fetch or route-table call failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A lookup by key found nothing.
    #[error("No {what} matches {key}")]
    NotFound {
        /// Kind of object looked up
        what: &'static str,
        /// The key that was looked up
        key: String,
    },

    /// Serializing the output failed.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Which adapters the `adapters` command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterSelection {
    All,
    Luid(u64),
    Index(u32),
}

impl AdapterSelection {
    const fn from_args(luid: Option<u64>, index: Option<u32>) -> Self {
        match (luid, index) {
            (Some(luid), _) => Self::Luid(luid),
            (None, Some(index)) => Self::Index(index),
            (None, None) => Self::All,
        }
    }
}

/// Runs a non-init subcommand against the platform implementations.
///
/// # Errors
///
/// Returns [`RunError`] if the layout check, the fetch or the output fails.
///
/// # Coverage Note
///
/// Excluded from coverage because it needs the live IP Helper API.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: ValidatedConfig, command: &Command) -> Result<(), RunError> {
    verify_layouts().map_err(RunError::Layout)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match *command {
        Command::Adapters { luid, index } => {
            let fetcher = FilteredFetcher::new(PlatformFetcher::new(config.query), config.filter);
            list_adapters(
                &fetcher,
                AdapterSelection::from_args(luid, index),
                config.pretty,
                &mut out,
            )
        }
        Command::Routes { luid, destination } => list_routes(
            &PlatformRouteTable::new(),
            luid,
            destination.as_ref(),
            config.ip_version,
            config.pretty,
            &mut out,
        ),
        Command::Init { .. } => Ok(()),
    }
}

/// Writes the selected adapters as a JSON array, or one object for a lookup.
///
/// # Errors
///
/// Returns [`RunError::NotFound`] when a lookup matches nothing.
pub fn list_adapters<F: AdapterFetcher, W: Write>(
    fetcher: &F,
    selection: AdapterSelection,
    pretty: bool,
    out: &mut W,
) -> Result<(), RunError> {
    match selection {
        AdapterSelection::All => {
            let adapters = fetcher.fetch()?;
            tracing::info!(count = adapters.len(), "listing adapters");
            write_json(&adapters, pretty, out)
        }
        AdapterSelection::Luid(luid) => {
            let adapter = fetcher.find_by_luid(luid)?.ok_or_else(|| RunError::NotFound {
                what: "adapter",
                key: format!("luid {luid}"),
            })?;
            write_json(&adapter, pretty, out)
        }
        AdapterSelection::Index(index) => {
            let adapter = fetcher.find_by_index(index)?.ok_or_else(|| RunError::NotFound {
                what: "adapter",
                key: format!("index {index}"),
            })?;
            write_json(&adapter, pretty, out)
        }
    }
}

/// Writes routes as a JSON array, or the exact-prefix match as one object.
///
/// # Errors
///
/// Returns [`RunError::NotFound`] when `destination` has no route.
pub fn list_routes<T: RouteTable, W: Write>(
    table: &T,
    luid: Option<u64>,
    destination: Option<&IpNet>,
    version: IpVersion,
    pretty: bool,
    out: &mut W,
) -> Result<(), RunError> {
    if let Some(destination) = destination {
        let route = table
            .find_route(luid, destination)?
            .ok_or_else(|| RunError::NotFound {
                what: "route",
                key: destination.to_string(),
            })?;
        return write_json(&route, pretty, out);
    }

    let routes = table.routes(luid, version)?;
    tracing::info!(count = routes.len(), ?luid, "listing routes");
    write_json(&routes, pretty, out)
}

fn write_json<T: Serialize + ?Sized, W: Write>(
    value: &T,
    pretty: bool,
    out: &mut W,
) -> Result<(), RunError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
