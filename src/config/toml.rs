//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Adapter query configuration section
    #[serde(default)]
    pub query: QuerySection,

    /// Network adapter filter configuration
    #[serde(default)]
    pub filter: FilterSection,

    /// Output formatting configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Adapter query section, mapped onto the `GetAdaptersAddresses` flags.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_field_names)]
pub struct QuerySection {
    /// Address family: "ipv4", "ipv6", or "both"
    pub ip_version: Option<String>,

    /// Report on-link prefixes
    pub include_prefixes: Option<bool>,

    /// Report gateway addresses
    pub include_gateways: Option<bool>,

    /// Report WINS servers
    pub include_wins: Option<bool>,

    /// Report interfaces without an address
    pub include_all_interfaces: Option<bool>,

    /// Omit anycast addresses
    pub skip_anycast: Option<bool>,

    /// Omit multicast addresses
    pub skip_multicast: Option<bool>,

    /// Omit DNS server addresses
    pub skip_dns_servers: Option<bool>,
}

/// Adapter filter configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Regex patterns for adapters to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns for adapters to exclude
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Exclude virtual adapters
    #[serde(default)]
    pub exclude_virtual: bool,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Pretty-print JSON output
    pub pretty: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
            path: Some(path.to_path_buf()),
            source: e,
        })
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: None,
            source: e,
        })
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# winipcfg configuration file

[query]
# Address family: "ipv4"/"v4"/"4", "ipv6"/"v6"/"6", or "both"/"all"/"dual"
# (default: both, can be overridden by --ip-version)
# ip_version = "both"

# Report on-link prefixes (default: true)
include_prefixes = true

# Report gateway addresses (default: true)
include_gateways = true

# Report WINS servers (default: false)
# include_wins = false

# Report interfaces that have no address (default: false)
# include_all_interfaces = false

# Omit parts of each adapter (default: false)
# skip_anycast = false
# skip_multicast = false
# skip_dns_servers = false

[filter]
# Regex patterns on the adapter friendly name to include (empty = all)
# Note: CLI patterns REPLACE these entirely (not merged)
# include = ["^Ethernet", "^Wi-Fi"]

# Regex patterns on the adapter friendly name to exclude
# Note: CLI patterns REPLACE these entirely (not merged)
# exclude = ["^vEthernet", "^Bluetooth"]

# Exclude virtual adapters (tunnels, PPP)
# exclude_virtual = false

[output]
# Pretty-print JSON (default: true, --compact disables)
# pretty = true
"#
    .to_string()
}
