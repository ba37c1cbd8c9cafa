//! Configuration layer for winipcfg.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The query flags (`[query]` section) are TOML-only.
//!
//! For filter patterns (`include_adapters`, `exclude_adapters`), CLI patterns **replace**
//! TOML patterns entirely (not merged). Include and exclude patterns are handled
//! independently: `--include-adapter` replaces only the TOML includes.
//!
//! # Boolean Flag Semantics
//!
//! `--exclude-virtual` uses OR semantics with `filter.exclude_virtual`, and
//! `--compact` always overrides `output.pretty`. Flags only enable, they never
//! switch a TOML setting back off.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, IpVersionArg};
pub use error::ConfigError;
pub use toml::{FilterSection, OutputSection, QuerySection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
