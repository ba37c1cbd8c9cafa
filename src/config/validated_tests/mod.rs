//! Tests for validated configuration.

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

/// Helper to create CLI args from a slice; the subcommand defaults to `adapters`
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["winipcfg"];
    full_args.extend(args);
    full_args.push("adapters");
    Cli::try_parse_from_iter(full_args).unwrap()
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod precedence_tests;
