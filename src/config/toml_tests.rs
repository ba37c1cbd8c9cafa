//! Tests for TOML configuration parsing.

use super::error::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert_eq!(config.query.ip_version, None);
        assert!(config.filter.include.is_empty());
        assert_eq!(config.output.pretty, None);
    }

    #[test]
    fn parse_query_section() {
        let toml = r#"
            [query]
            ip_version = "ipv6"
            include_prefixes = false
            include_wins = true
            include_all_interfaces = true
            skip_anycast = true
            skip_multicast = true
            skip_dns_servers = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let query = &config.query;

        assert_eq!(query.ip_version.as_deref(), Some("ipv6"));
        assert_eq!(query.include_prefixes, Some(false));
        assert_eq!(query.include_gateways, None);
        assert_eq!(query.include_wins, Some(true));
        assert_eq!(query.include_all_interfaces, Some(true));
        assert_eq!(query.skip_anycast, Some(true));
        assert_eq!(query.skip_multicast, Some(true));
        assert_eq!(query.skip_dns_servers, Some(true));
    }

    #[test]
    fn parse_filter_section() {
        let toml = r#"
            [filter]
            include = ["^Ethernet", "^Wi-Fi"]
            exclude = ["^vEthernet"]
            exclude_virtual = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let filter = &config.filter;

        assert_eq!(filter.include, vec!["^Ethernet", "^Wi-Fi"]);
        assert_eq!(filter.exclude, vec!["^vEthernet"]);
        assert!(filter.exclude_virtual);
    }

    #[test]
    fn parse_output_section() {
        let config = TomlConfig::parse("[output]\npretty = false\n").unwrap();
        assert_eq!(config.output.pretty, Some(false));
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[monitor]\npoll_interval = 60\n").is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(TomlConfig::parse("[query]\ninclude_everything = true\n").is_err());
    }

    #[test]
    fn string_input_reports_no_file() {
        let err = TomlConfig::parse("[query\n").unwrap_err();

        assert!(matches!(err, ConfigError::TomlParse { path: None, .. }));
        assert!(err.to_string().starts_with("Invalid TOML: "));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(TomlConfig::parse("[output]\npretty = \"yes\"\n").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.query.include_prefixes, Some(true));
        assert_eq!(config.query.include_gateways, Some(true));
        assert!(!config.filter.exclude_virtual);
    }

    #[test]
    fn default_template_documents_every_section() {
        let template = default_config_template();

        for section in ["[query]", "[filter]", "[output]"] {
            assert!(template.contains(section), "missing {section}");
        }
    }
}
