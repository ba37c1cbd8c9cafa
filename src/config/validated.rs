//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::network::filter::{FilterChain, KindFilter, NameRegexFilter};
use crate::network::{AdapterKind, AdapterQuery, IpVersion};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::{QuerySection, TomlConfig};

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Address family to query
    pub ip_version: IpVersion,

    /// `GetAdaptersAddresses` request, with `ip_version` applied
    pub query: AdapterQuery,

    /// Adapter filter configuration
    pub filter: FilterChain,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ ip_version: {}, flags: {:#06x}, pretty: {}, filters: {}+{} }}",
            self.ip_version,
            self.query.flags(),
            self.pretty,
            self.filter.include_count(),
            self.filter.exclude_count(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over [`defaults`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The IP version string in the TOML file is unknown
    /// - Regex patterns are invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let ip_version = Self::resolve_ip_version(cli, toml)?;
        let query = Self::build_query(ip_version, toml.map(|t| &t.query));
        let filter = Self::build_filter(cli, toml)?;

        // --compact always wins over the file
        let pretty = !cli.compact
            && toml
                .and_then(|t| t.output.pretty)
                .unwrap_or(defaults::PRETTY);

        Ok(Self {
            ip_version,
            query,
            filter,
            pretty,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_ip_version(cli: &Cli, toml: Option<&TomlConfig>) -> Result<IpVersion, ConfigError> {
        if let Some(version) = cli.ip_version {
            return Ok(version.into());
        }

        toml.and_then(|t| t.query.ip_version.as_deref())
            .map_or(Ok(defaults::IP_VERSION), parse_ip_version)
    }

    fn build_query(ip_version: IpVersion, section: Option<&QuerySection>) -> AdapterQuery {
        let base = defaults::query();
        let Some(section) = section else {
            return AdapterQuery {
                ip_version: Some(ip_version),
                ..base
            };
        };

        AdapterQuery {
            ip_version: Some(ip_version),
            include_prefixes: section.include_prefixes.unwrap_or(base.include_prefixes),
            include_gateways: section.include_gateways.unwrap_or(base.include_gateways),
            include_wins: section.include_wins.unwrap_or(base.include_wins),
            include_all_interfaces: section
                .include_all_interfaces
                .unwrap_or(base.include_all_interfaces),
            skip_anycast: section.skip_anycast.unwrap_or(base.skip_anycast),
            skip_multicast: section.skip_multicast.unwrap_or(base.skip_multicast),
            skip_dns_servers: section.skip_dns_servers.unwrap_or(base.skip_dns_servers),
        }
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        let mut chain = FilterChain::new();

        // Exclude virtual if CLI flag or TOML setting
        if cli.exclude_virtual || toml.is_some_and(|t| t.filter.exclude_virtual) {
            chain = chain.exclude(KindFilter::new([AdapterKind::Virtual]));
        }

        // CLI patterns replace TOML patterns, per direction
        let includes = if cli.include_adapters.is_empty() {
            toml.map_or(&[][..], |t| t.filter.include.as_slice())
        } else {
            cli.include_adapters.as_slice()
        };
        let excludes = if cli.exclude_adapters.is_empty() {
            toml.map_or(&[][..], |t| t.filter.exclude.as_slice())
        } else {
            cli.exclude_adapters.as_slice()
        };

        for pattern in includes {
            chain = chain.include(compile(pattern)?);
        }
        for pattern in excludes {
            chain = chain.exclude(compile(pattern)?);
        }

        Ok(chain)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn compile(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn parse_ip_version(s: &str) -> Result<IpVersion, ConfigError> {
    match s.to_lowercase().as_str() {
        "ipv4" | "v4" | "4" => Ok(IpVersion::V4),
        "ipv6" | "v6" | "6" => Ok(IpVersion::V6),
        "both" | "all" | "dual" => Ok(IpVersion::Both),
        _ => Err(ConfigError::InvalidIpVersion {
            value: s.to_string(),
        }),
    }
}
