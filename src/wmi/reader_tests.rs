//! Tests for the configuration reader.

use std::collections::HashMap;
use std::net::IpAddr;

use super::*;

// ============================================================================
// Test Fixtures
// ============================================================================

const SETTING_ID: &str = "{5F0B3F4A-3D5B-4E53-9A4F-0C1B2D3E4F50}";

/// Properties the reader asks for, with null values.
const PROPERTY_NAMES: &[&str] = &[
    "Caption",
    "Description",
    "SettingID",
    "ArpAlwaysSourceRoute",
    "ArpUseEtherSNAP",
    "DatabasePath",
    "DeadGWDetectEnabled",
    "DefaultIPGateway",
    "GatewayCostMetric",
    "DefaultTOS",
    "DefaultTTL",
    "DHCPEnabled",
    "DHCPLeaseExpires",
    "DHCPLeaseObtained",
    "DHCPServer",
    "DNSDomain",
    "DNSDomainSuffixSearchOrder",
    "DNSEnabledForWINSResolution",
    "DNSHostName",
    "DNSServerSearchOrder",
    "DomainDNSRegistrationEnabled",
    "ForwardBufferMemory",
    "FullDNSRegistrationEnabled",
    "IGMPLevel",
    "Index",
    "InterfaceIndex",
    "IPAddress",
    "IPSubnet",
    "IPConnectionMetric",
    "IPEnabled",
    "IPFilterSecurityEnabled",
    "IPPortSecurityEnabled",
    "IPSecPermitIPProtocols",
    "IPSecPermitTCPPorts",
    "IPSecPermitUDPPorts",
    "IPUseZeroBroadcast",
    "KeepAliveInterval",
    "KeepAliveTime",
    "MACAddress",
    "MTU",
    "NumForwardPackets",
    "PMTUBHDetectEnabled",
    "PMTUDiscoveryEnabled",
    "ServiceName",
    "TcpipNetbiosOptions",
    "TcpMaxConnectRetransmissions",
    "TcpMaxDataRetransmissions",
    "TcpNumConnections",
    "TcpUseRFC1122UrgentPointer",
    "TcpWindowSize",
    "WINSEnableLMHostsLookup",
    "WINSHostLookupFile",
    "WINSPrimaryServer",
    "WINSScopeID",
    "WINSSecondaryServer",
];

type Object = HashMap<String, PropertyValue>;

fn null_object(setting_id: &str) -> Object {
    let mut object: Object = PROPERTY_NAMES
        .iter()
        .map(|name| ((*name).to_string(), PropertyValue::Null))
        .collect();
    object.insert("SettingID".to_string(), setting_id.into());
    object
}

fn set(object: &mut Object, name: &str, value: impl Into<PropertyValue>) {
    object.insert(name.to_string(), value.into());
}

fn ethernet_object() -> Object {
    let mut object = null_object(SETTING_ID);
    set(&mut object, "Caption", "[00000007] Intel(R) Ethernet Connection");
    set(&mut object, "Description", "Intel(R) Ethernet Connection");
    set(&mut object, "DHCPEnabled", true);
    set(&mut object, "DHCPServer", "192.168.1.1");
    set(&mut object, "DefaultIPGateway", vec!["192.168.1.1", "fe80::1"]);
    set(&mut object, "GatewayCostMetric", vec![0_i64, 256]);
    set(&mut object, "IPAddress", vec!["192.168.1.20", "fe80::1c2d:3e4f:5a6b:7c8d"]);
    set(&mut object, "IPSubnet", vec!["255.255.255.0", "64"]);
    set(&mut object, "DNSServerSearchOrder", vec!["1.1.1.1", "8.8.8.8"]);
    set(&mut object, "DNSDomainSuffixSearchOrder", Vec::<&str>::new());
    set(&mut object, "IPEnabled", true);
    set(&mut object, "InterfaceIndex", 7_i64);
    set(&mut object, "MTU", 1500_i64);
    set(&mut object, "TcpWindowSize", 64240_i64);
    set(&mut object, "MACAddress", "00:1A:2B:3C:4D:5E");
    object
}

// ============================================================================
// Field Decoding
// ============================================================================

mod fields {
    use super::*;

    #[test]
    fn reads_scalar_properties() {
        let config = read_configuration(&ethernet_object(), None).unwrap().unwrap();

        assert_eq!(config.setting_id, SETTING_ID);
        assert_eq!(config.description, "Intel(R) Ethernet Connection");
        assert!(config.dhcp_enabled);
        assert!(config.ip_enabled);
        assert_eq!(config.interface_index, 7);
        assert_eq!(config.mtu, 1500);
        assert_eq!(config.tcp_window_size, 64240);
        assert_eq!(config.mac_address, "00:1A:2B:3C:4D:5E");
    }

    #[test]
    fn null_properties_read_as_empty_values() {
        let config = read_configuration(&null_object(SETTING_ID), None).unwrap().unwrap();

        assert_eq!(config.caption, "");
        assert!(!config.dhcp_enabled);
        assert_eq!(config.mtu, 0);
        assert_eq!(config.default_ip_gateway, None);
        assert_eq!(config.ip_address, None);
        assert_eq!(config.dns_server_search_order, None);
    }

    #[test]
    fn empty_array_differs_from_null() {
        let config = read_configuration(&ethernet_object(), None).unwrap().unwrap();
        assert_eq!(config.dns_domain_suffix_search_order, Some(vec![]));
    }

    #[test]
    fn integer_booleans_are_accepted() {
        let mut object = null_object(SETTING_ID);
        set(&mut object, "IPEnabled", 1_i64);
        set(&mut object, "DHCPEnabled", 0_i64);

        let config = read_configuration(&object, None).unwrap().unwrap();
        assert!(config.ip_enabled);
        assert!(!config.dhcp_enabled);
    }

    #[test]
    fn dns_servers_are_parsed() {
        let config = read_configuration(&ethernet_object(), None).unwrap().unwrap();
        let expected: Vec<IpAddr> = vec!["1.1.1.1".parse().unwrap(), "8.8.8.8".parse().unwrap()];
        assert_eq!(config.dns_server_search_order, Some(expected));
    }

    #[test]
    fn gateways_pair_with_metrics() {
        let config = read_configuration(&ethernet_object(), None).unwrap().unwrap();
        let gateways = config.default_ip_gateway.unwrap();

        assert_eq!(gateways.len(), 2);
        assert_eq!(gateways[0].to_string(), "192.168.1.1 (Metric: 0)");
        assert_eq!(gateways[1].cost_metric, 256);
    }

    #[test]
    fn subnets_accept_masks_and_prefix_lengths() {
        let config = read_configuration(&ethernet_object(), None).unwrap().unwrap();
        let addresses = config.ip_address.unwrap();

        assert_eq!(addresses[0].to_string(), "192.168.1.20/24");
        assert_eq!(addresses[1].to_string(), "fe80::1c2d:3e4f:5a6b:7c8d/64");
    }
}

// ============================================================================
// Setting Id Filter
// ============================================================================

mod setting_id_filter {
    use super::*;

    #[test]
    fn matches_ignoring_case_and_whitespace() {
        let object = ethernet_object();
        let wanted = format!("  {}  ", SETTING_ID.to_lowercase());

        assert!(read_configuration(&object, Some(wanted.as_str())).unwrap().is_some());
    }

    #[test]
    fn mismatch_skips_without_reading_other_properties() {
        // Only SettingID is present; reading anything else would fail.
        let mut object = Object::new();
        set(&mut object, "SettingID", "{00000000-0000-0000-0000-000000000000}");

        assert_eq!(read_configuration(&object, Some(SETTING_ID)).unwrap(), None);
    }

    #[test]
    fn empty_filter_selects_everything() {
        assert!(read_configuration(&ethernet_object(), Some(" ")).unwrap().is_some());
    }

    #[test]
    fn find_returns_matching_object() {
        let objects = vec![null_object("{A}"), ethernet_object(), null_object("{B}")];

        let config = find_configuration(objects, SETTING_ID).unwrap();
        assert_eq!(config.interface_index, 7);
    }

    #[test]
    fn find_reports_missing_setting_id() {
        let err = find_configuration(vec![null_object("{A}")], "{C}").unwrap_err();
        assert!(matches!(err, ConfigurationError::NotFound { setting_id } if setting_id == "{C}"));
    }

    #[test]
    fn read_all_keeps_order() {
        let configs = read_configurations(vec![null_object("{A}"), null_object("{B}")]).unwrap();
        let ids: Vec<&str> = configs.iter().map(|c| c.setting_id.as_str()).collect();
        assert_eq!(ids, vec!["{A}", "{B}"]);
    }
}

// ============================================================================
// Parallel Array Validation
// ============================================================================

mod parallel_arrays {
    use super::*;

    fn mismatch_lengths(object: &Object) -> (Option<usize>, Option<usize>) {
        match read_configuration(object, None) {
            Err(ConfigurationError::MismatchedArrays {
                primary_len,
                secondary_len,
                ..
            }) => (primary_len, secondary_len),
            other => panic!("expected MismatchedArrays, got {other:?}"),
        }
    }

    #[test]
    fn null_gateways_with_metrics_is_error() {
        let mut object = null_object(SETTING_ID);
        set(&mut object, "GatewayCostMetric", vec![0_i64]);

        assert_eq!(mismatch_lengths(&object), (None, Some(1)));
    }

    #[test]
    fn null_gateways_with_empty_metrics_is_accepted() {
        let mut object = null_object(SETTING_ID);
        set(&mut object, "GatewayCostMetric", Vec::<i64>::new());

        let config = read_configuration(&object, None).unwrap().unwrap();
        assert_eq!(config.default_ip_gateway, None);
    }

    #[test]
    fn gateways_with_null_metrics_is_error() {
        let mut object = null_object(SETTING_ID);
        set(&mut object, "DefaultIPGateway", vec!["10.0.0.1"]);

        assert_eq!(mismatch_lengths(&object), (Some(1), None));
    }

    #[test]
    fn gateway_length_mismatch_is_error() {
        let mut object = ethernet_object();
        set(&mut object, "GatewayCostMetric", vec![0_i64]);

        assert_eq!(mismatch_lengths(&object), (Some(2), Some(1)));
    }

    #[test]
    fn addresses_with_null_subnets_is_error() {
        let mut object = ethernet_object();
        set(&mut object, "IPSubnet", PropertyValue::Null);

        let err = read_configuration(&object, None).unwrap_err();
        assert_eq!(err.to_string(), "IPAddress has 2 items while IPSubnet has null");
    }

    #[test]
    fn null_addresses_with_subnets_is_error() {
        let mut object = null_object(SETTING_ID);
        set(&mut object, "IPSubnet", vec!["255.0.0.0"]);

        assert_eq!(mismatch_lengths(&object), (None, Some(1)));
    }
}

// ============================================================================
// Malformed Values
// ============================================================================

mod malformed {
    use super::*;

    #[test]
    fn missing_property_is_error() {
        let mut object = ethernet_object();
        object.remove("MTU");

        let err = read_configuration(&object, None).unwrap_err();
        assert!(matches!(err, ConfigurationError::Property { name, .. } if name == "MTU"));
    }

    #[test]
    fn wrong_variant_is_error() {
        let mut object = ethernet_object();
        set(&mut object, "MTU", "1500");

        let err = read_configuration(&object, None).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::TypeMismatch { name: "MTU", expected: "int", found: "string" }
        ));
    }

    #[test]
    fn out_of_range_integer_is_error() {
        let mut object = ethernet_object();
        set(&mut object, "DefaultTTL", 300_i64);

        let err = read_configuration(&object, None).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::OutOfRange { name: "DefaultTTL", value: 300 }
        ));
    }

    #[test]
    fn bad_address_is_error() {
        let mut object = ethernet_object();
        set(&mut object, "DNSServerSearchOrder", vec!["not-an-ip"]);

        let err = read_configuration(&object, None).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidAddress { name: "DNSServerSearchOrder", .. }));
    }

    #[test]
    fn non_contiguous_mask_is_error() {
        let mut object = ethernet_object();
        set(&mut object, "IPSubnet", vec!["255.0.255.0", "64"]);

        let err = read_configuration(&object, None).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidAddress { name: "IPSubnet", .. }));
    }
}

// ============================================================================
// DNS Server Updates
// ============================================================================

mod dns_servers {
    use std::cell::RefCell;

    use super::*;

    /// An object that records method calls and answers with `status`.
    struct Configurable {
        properties: Object,
        status: i64,
        calls: RefCell<Vec<(String, Vec<PropertyValue>)>>,
    }

    impl Configurable {
        fn new(properties: Object, status: i64) -> Self {
            Self {
                properties,
                status,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, Vec<PropertyValue>)> {
            self.calls.borrow().clone()
        }
    }

    impl PropertySource for Configurable {
        fn property(&self, name: &str) -> Result<PropertyValue, ConfigurationError> {
            self.properties.property(name)
        }
    }

    impl MethodSource for Configurable {
        fn call_method(&self, name: &str, args: &[PropertyValue]) -> Result<i64, ConfigurationError> {
            self.calls.borrow_mut().push((name.to_string(), args.to_vec()));
            Ok(self.status)
        }
    }

    fn servers(list: &[&str]) -> Vec<IpAddr> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn order_argument(list: &[&str]) -> Vec<PropertyValue> {
        vec![PropertyValue::from(list.to_vec())]
    }

    #[test]
    fn add_appends_after_existing_servers() {
        let objects = [Configurable::new(ethernet_object(), 0)];

        set_dns_servers(&objects, SETTING_ID, &servers(&["9.9.9.9"]), true).unwrap();

        assert_eq!(
            objects[0].calls(),
            vec![(
                "SetDNSServerSearchOrder".to_string(),
                order_argument(&["1.1.1.1", "8.8.8.8", "9.9.9.9"])
            )]
        );
    }

    #[test]
    fn add_with_null_existing_order_sends_only_new_servers() {
        let objects = [Configurable::new(null_object(SETTING_ID), 0)];

        set_dns_servers(&objects, SETTING_ID, &servers(&["2606:4700::1111"]), true).unwrap();

        assert_eq!(objects[0].calls()[0].1, order_argument(&["2606:4700::1111"]));
    }

    #[test]
    fn replace_drops_existing_servers() {
        let objects = [Configurable::new(ethernet_object(), 0)];

        set_dns_servers(&objects, SETTING_ID, &servers(&["9.9.9.9", "149.112.112.112"]), false)
            .unwrap();

        assert_eq!(
            objects[0].calls()[0].1,
            order_argument(&["9.9.9.9", "149.112.112.112"])
        );
    }

    #[test]
    fn only_the_matching_object_is_called() {
        let objects = [
            Configurable::new(null_object("{A}"), 0),
            Configurable::new(ethernet_object(), 0),
        ];
        let wanted = format!(" {} ", SETTING_ID.to_lowercase());

        set_dns_servers(&objects, &wanted, &servers(&["9.9.9.9"]), false).unwrap();

        assert!(objects[0].calls().is_empty());
        assert_eq!(objects[1].calls().len(), 1);
    }

    #[test]
    fn non_zero_status_is_error() {
        let objects = [Configurable::new(ethernet_object(), 70)];

        let err = set_dns_servers(&objects, SETTING_ID, &servers(&["9.9.9.9"]), false).unwrap_err();

        assert!(matches!(
            err,
            ConfigurationError::MethodFailed { method: "SetDNSServerSearchOrder", code: 70 }
        ));
        assert_eq!(err.to_string(), "SetDNSServerSearchOrder returned 70");
    }

    #[test]
    fn unknown_setting_id_is_not_found() {
        let objects = [Configurable::new(null_object("{A}"), 0)];

        let err = set_dns_servers(&objects, "{C}", &servers(&["9.9.9.9"]), true).unwrap_err();

        assert!(matches!(err, ConfigurationError::NotFound { setting_id } if setting_id == "{C}"));
        assert!(objects[0].calls().is_empty());
    }
}
