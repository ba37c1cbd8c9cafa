//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ipnet::IpNet;

use super::defaults;

/// winipcfg: Windows IP configuration inspector
///
/// Lists network adapters and IP routes through the IP Helper API and
/// prints them as JSON.
#[derive(Debug, Parser)]
#[command(name = "winipcfg")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Address family to query
    #[arg(long = "ip-version", value_enum, global = true)]
    pub ip_version: Option<IpVersionArg>,

    /// Regex pattern for adapters to include (can be specified multiple times)
    #[arg(long = "include-adapter", value_name = "PATTERN", global = true)]
    pub include_adapters: Vec<String>,

    /// Regex pattern for adapters to exclude (can be specified multiple times)
    #[arg(long = "exclude-adapter", value_name = "PATTERN", global = true)]
    pub exclude_adapters: Vec<String>,

    /// Exclude virtual adapters (tunnels, PPP)
    #[arg(long = "exclude-virtual", global = true)]
    pub exclude_virtual: bool,

    /// Print single-line JSON instead of pretty-printed output
    #[arg(long, global = true)]
    pub compact: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for winipcfg
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List network adapters
    Adapters {
        /// Only the adapter with this interface luid
        #[arg(long, conflicts_with = "index")]
        luid: Option<u64>,

        /// Only the adapter with this IPv4 or IPv6 interface index
        #[arg(long)]
        index: Option<u32>,
    },

    /// List IP routes
    Routes {
        /// Only routes on the interface with this luid
        #[arg(long)]
        luid: Option<u64>,

        /// Only the route to exactly this prefix
        #[arg(long, value_name = "CIDR")]
        destination: Option<IpNet>,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// IP version argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IpVersionArg {
    /// IPv4 only
    #[value(name = "ipv4")]
    V4,
    /// IPv6 only
    #[value(name = "ipv6")]
    V6,
    /// Both IPv4 and IPv6
    #[value(name = "both")]
    Both,
}

impl From<IpVersionArg> for crate::network::IpVersion {
    fn from(arg: IpVersionArg) -> Self {
        match arg {
            IpVersionArg::V4 => Self::V4,
            IpVersionArg::V6 => Self::V6,
            IpVersionArg::Both => Self::Both,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
