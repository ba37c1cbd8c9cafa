//! Tests for CLI vs TOML vs default precedence rules.

use crate::network::{
    GAA_FLAG_INCLUDE_GATEWAYS, GAA_FLAG_INCLUDE_PREFIX, GAA_FLAG_INCLUDE_WINS_INFO,
    GAA_FLAG_SKIP_DNS_SERVER, IpVersion,
};

use super::*;

mod ip_version {
    use super::*;

    #[test]
    fn cli_overrides_toml() {
        let toml = toml("[query]\nip_version = \"ipv4\"\n");
        let config = ValidatedConfig::from_raw(&cli(&["--ip-version", "ipv6"]), Some(&toml)).unwrap();

        assert_eq!(config.ip_version, IpVersion::V6);
        assert_eq!(config.query.ip_version, Some(IpVersion::V6));
    }

    #[test]
    fn toml_overrides_default() {
        let toml = toml("[query]\nip_version = \"ipv4\"\n");
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.ip_version, IpVersion::V4);
    }

    #[test]
    fn cli_value_skips_toml_validation() {
        let toml = toml("[query]\nip_version = \"bogus\"\n");
        let config = ValidatedConfig::from_raw(&cli(&["--ip-version", "both"]), Some(&toml)).unwrap();

        assert_eq!(config.ip_version, IpVersion::Both);
    }
}

mod query_flags {
    use super::*;

    #[test]
    fn defaults_request_prefixes_and_gateways() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(
            config.query.flags(),
            GAA_FLAG_INCLUDE_PREFIX | GAA_FLAG_INCLUDE_GATEWAYS
        );
    }

    #[test]
    fn toml_flags_override_defaults() {
        let toml = toml(
            r"
            [query]
            include_prefixes = false
            include_wins = true
            skip_dns_servers = true
        ",
        );
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(
            config.query.flags(),
            GAA_FLAG_INCLUDE_GATEWAYS | GAA_FLAG_INCLUDE_WINS_INFO | GAA_FLAG_SKIP_DNS_SERVER
        );
    }
}

mod output {
    use super::*;

    #[test]
    fn compact_flag_overrides_toml_pretty() {
        let toml = toml("[output]\npretty = true\n");
        let config = ValidatedConfig::from_raw(&cli(&["--compact"]), Some(&toml)).unwrap();

        assert!(!config.pretty);
    }

    #[test]
    fn verbose_comes_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["-v"]), None).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn display_summarizes_config() {
        let config = ValidatedConfig::from_raw(&cli(&["--exclude-virtual"]), None).unwrap();
        let text = config.to_string();

        assert!(text.contains("pretty: true"));
        assert!(text.contains("filters: 0+1"));
    }
}
