//! Errors raised while assembling the winipcfg configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading and validating the CLI and TOML configuration.
///
/// Any of these ends the process with the configuration exit code before
/// the IP Helper API is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file named by `--config` could not be read.
    #[error("Cannot read config file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML is malformed or has a key outside `[query]`, `[filter]`
    /// and `[output]`.
    #[error("Invalid TOML{}: {source}", in_file(.path))]
    TomlParse {
        /// File the TOML came from, `None` when parsed from a string
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// `winipcfg init` could not write the template.
    #[error("Cannot write config template '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An `--include-adapter`/`--exclude-adapter` pattern, or a
    /// `[filter]` pattern, does not compile.
    #[error("Invalid adapter name pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// `[query] ip_version` names no known address family.
    #[error("Invalid [query] ip_version '{value}': expected ipv4, ipv6 or both")]
    InvalidIpVersion { value: String },
}

#[allow(clippy::ref_option)]
fn in_file(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(String::new, |path| format!(" in '{}'", path.display()))
}
