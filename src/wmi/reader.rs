//! Conversion of `Win32_NetworkAdapterConfiguration` objects.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use ipnet::IpNet;
use serde::Serialize;

use super::{ConfigurationError, PropertySource, PropertyValue};

/// A default gateway paired with its cost metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GatewayCost {
    pub gateway: IpAddr,
    pub cost_metric: u16,
}

impl fmt::Display for GatewayCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Metric: {})", self.gateway, self.cost_metric)
    }
}

/// Typed view of a `Win32_NetworkAdapterConfiguration` object.
///
/// Array properties are `None` when the object reports null, which is not
/// the same as an empty array. Null scalars read as zero, false or "".
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkAdapterConfiguration {
    pub caption: String,
    pub description: String,
    /// Adapter GUID in registry form; matches [`Adapter::adapter_name`].
    ///
    /// [`Adapter::adapter_name`]: crate::network::Adapter::adapter_name
    pub setting_id: String,
    pub arp_always_source_route: bool,
    pub arp_use_ether_snap: bool,
    pub database_path: String,
    pub dead_gw_detect_enabled: bool,
    /// `DefaultIPGateway` zipped with `GatewayCostMetric`.
    pub default_ip_gateway: Option<Vec<GatewayCost>>,
    pub default_tos: u8,
    pub default_ttl: u8,
    pub dhcp_enabled: bool,
    /// CIM datetime string, kept verbatim.
    pub dhcp_lease_expires: String,
    /// CIM datetime string, kept verbatim.
    pub dhcp_lease_obtained: String,
    pub dhcp_server: String,
    pub dns_domain: String,
    pub dns_domain_suffix_search_order: Option<Vec<String>>,
    pub dns_enabled_for_wins_resolution: bool,
    pub dns_host_name: String,
    pub dns_server_search_order: Option<Vec<IpAddr>>,
    pub domain_dns_registration_enabled: bool,
    pub forward_buffer_memory: u32,
    pub full_dns_registration_enabled: bool,
    pub igmp_level: u8,
    pub index: u32,
    pub interface_index: u32,
    /// `IPAddress` zipped with `IPSubnet`.
    pub ip_address: Option<Vec<IpNet>>,
    pub ip_connection_metric: u32,
    pub ip_enabled: bool,
    pub ip_filter_security_enabled: bool,
    pub ip_port_security_enabled: bool,
    pub ip_sec_permit_ip_protocols: Option<Vec<String>>,
    pub ip_sec_permit_tcp_ports: Option<Vec<String>>,
    pub ip_sec_permit_udp_ports: Option<Vec<String>>,
    pub ip_use_zero_broadcast: bool,
    pub keep_alive_interval: u32,
    pub keep_alive_time: u32,
    pub mac_address: String,
    pub mtu: u32,
    pub num_forward_packets: u32,
    pub pmtu_bh_detect_enabled: bool,
    pub pmtu_discovery_enabled: bool,
    pub service_name: String,
    pub tcpip_netbios_options: u32,
    pub tcp_max_connect_retransmissions: u32,
    pub tcp_max_data_retransmissions: u32,
    pub tcp_num_connections: u32,
    pub tcp_use_rfc1122_urgent_pointer: bool,
    pub tcp_window_size: u16,
    pub wins_enable_lmhosts_lookup: bool,
    pub wins_host_lookup_file: String,
    pub wins_primary_server: String,
    pub wins_scope_id: String,
    pub wins_secondary_server: String,
}

/// Typed accessors over a [`PropertySource`].
pub(super) struct Properties<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: PropertySource + ?Sized> Properties<'a, S> {
    pub(super) const fn new(source: &'a S) -> Self {
        Self { source }
    }

    fn bool(&self, name: &'static str) -> Result<bool, ConfigurationError> {
        match self.source.property(name)? {
            PropertyValue::Null => Ok(false),
            PropertyValue::Bool(value) => Ok(value),
            PropertyValue::Int(value) => Ok(value != 0),
            other => Err(mismatch(name, "bool", &other)),
        }
    }

    pub(super) fn string(&self, name: &'static str) -> Result<String, ConfigurationError> {
        match self.source.property(name)? {
            PropertyValue::Null => Ok(String::new()),
            PropertyValue::String(value) => Ok(value),
            other => Err(mismatch(name, "string", &other)),
        }
    }

    fn int<T: TryFrom<i64> + Default>(&self, name: &'static str) -> Result<T, ConfigurationError> {
        match self.source.property(name)? {
            PropertyValue::Null => Ok(T::default()),
            PropertyValue::Int(value) => narrow(name, value),
            other => Err(mismatch(name, "int", &other)),
        }
    }

    fn array(&self, name: &'static str) -> Result<Option<Vec<PropertyValue>>, ConfigurationError> {
        match self.source.property(name)? {
            PropertyValue::Null => Ok(None),
            PropertyValue::Array(values) => Ok(Some(values)),
            other => Err(mismatch(name, "array", &other)),
        }
    }

    pub(super) fn strings(&self, name: &'static str) -> Result<Option<Vec<String>>, ConfigurationError> {
        self.array(name)?
            .map(|values| {
                values
                    .into_iter()
                    .map(|value| match value {
                        PropertyValue::String(s) => Ok(s),
                        other => Err(mismatch(name, "string", &other)),
                    })
                    .collect()
            })
            .transpose()
    }

    fn ints<T: TryFrom<i64>>(&self, name: &'static str) -> Result<Option<Vec<T>>, ConfigurationError> {
        self.array(name)?
            .map(|values| {
                values
                    .into_iter()
                    .map(|value| match value {
                        PropertyValue::Int(n) => narrow(name, n),
                        other => Err(mismatch(name, "int", &other)),
                    })
                    .collect()
            })
            .transpose()
    }

    fn addresses(&self, name: &'static str) -> Result<Option<Vec<IpAddr>>, ConfigurationError> {
        self.strings(name)?
            .map(|values| values.iter().map(|s| parse_address(name, s)).collect())
            .transpose()
    }
}

fn mismatch(name: &'static str, expected: &'static str, found: &PropertyValue) -> ConfigurationError {
    ConfigurationError::TypeMismatch {
        name,
        expected,
        found: found.kind(),
    }
}

fn narrow<T: TryFrom<i64>>(name: &'static str, value: i64) -> Result<T, ConfigurationError> {
    T::try_from(value).map_err(|_| ConfigurationError::OutOfRange { name, value })
}

fn parse_address(name: &'static str, value: &str) -> Result<IpAddr, ConfigurationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidAddress {
            name,
            value: value.to_string(),
        })
}

/// Parses an `IPSubnet` entry: a dotted mask for IPv4, a decimal prefix
/// length for IPv6.
fn parse_subnet(address: IpAddr, subnet: &str) -> Result<IpNet, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidAddress {
        name: "IPSubnet",
        value: subnet.to_string(),
    };

    let subnet = subnet.trim();
    let prefix_len = if subnet.contains('.') {
        let mask: Ipv4Addr = subnet.parse().map_err(|_| invalid())?;
        ipnet::ipv4_mask_to_prefix(mask).map_err(|_| invalid())?
    } else {
        subnet.parse::<u8>().map_err(|_| invalid())?
    };

    IpNet::new(address, prefix_len).map_err(|_| invalid())
}

/// Pairs two parallel array properties entry by entry.
///
/// A null primary is accepted only with a null or empty secondary. A
/// non-null primary needs a non-null secondary of the same length.
fn zip_parallel<A, B>(
    primary: (&'static str, Option<Vec<A>>),
    secondary: (&'static str, Option<Vec<B>>),
) -> Result<Option<Vec<(A, B)>>, ConfigurationError> {
    let (primary_name, primary_values) = primary;
    let (secondary_name, secondary_values) = secondary;

    match (primary_values, secondary_values) {
        (None, None) => Ok(None),
        (None, Some(s)) if s.is_empty() => Ok(None),
        (Some(p), Some(s)) if p.len() == s.len() => Ok(Some(p.into_iter().zip(s).collect())),
        (p, s) => Err(ConfigurationError::MismatchedArrays {
            primary: primary_name,
            secondary: secondary_name,
            primary_len: p.map(|p| p.len()),
            secondary_len: s.map(|s| s.len()),
        }),
    }
}

fn read_gateways<S: PropertySource + ?Sized>(
    props: &Properties<'_, S>,
) -> Result<Option<Vec<GatewayCost>>, ConfigurationError> {
    let pairs = zip_parallel(
        ("DefaultIPGateway", props.strings("DefaultIPGateway")?),
        ("GatewayCostMetric", props.ints::<u16>("GatewayCostMetric")?),
    )?;

    pairs
        .map(|pairs| {
            pairs
                .into_iter()
                .map(|(gateway, cost_metric)| {
                    Ok(GatewayCost {
                        gateway: parse_address("DefaultIPGateway", &gateway)?,
                        cost_metric,
                    })
                })
                .collect()
        })
        .transpose()
}

fn read_ip_addresses<S: PropertySource + ?Sized>(
    props: &Properties<'_, S>,
) -> Result<Option<Vec<IpNet>>, ConfigurationError> {
    let pairs = zip_parallel(
        ("IPAddress", props.strings("IPAddress")?),
        ("IPSubnet", props.strings("IPSubnet")?),
    )?;

    pairs
        .map(|pairs| {
            pairs
                .into_iter()
                .map(|(address, subnet)| parse_subnet(parse_address("IPAddress", &address)?, &subnet))
                .collect()
        })
        .transpose()
}

pub(super) fn normalize_setting_id(id: &str) -> String {
    id.trim().to_uppercase()
}

/// Reads one configuration object.
///
/// With a `setting_id`, an object whose `SettingID` differs (compared
/// trimmed and upper-cased) yields `Ok(None)` after reading only that
/// property. An empty `setting_id` selects every object.
///
/// # Errors
///
/// Returns [`ConfigurationError`] when a property is missing, has the wrong
/// variant or fails to parse, and `MismatchedArrays` when the
/// gateway/metric or address/subnet arrays disagree.
pub fn read_configuration<S: PropertySource + ?Sized>(
    source: &S,
    setting_id: Option<&str>,
) -> Result<Option<NetworkAdapterConfiguration>, ConfigurationError> {
    let props = Properties::new(source);
    let sid = props.string("SettingID")?;

    let wanted = setting_id.map(normalize_setting_id).filter(|id| !id.is_empty());
    if wanted.is_some_and(|wanted| wanted != normalize_setting_id(&sid)) {
        tracing::trace!(setting_id = %sid, "skipping configuration object");
        return Ok(None);
    }

    Ok(Some(NetworkAdapterConfiguration {
        caption: props.string("Caption")?,
        description: props.string("Description")?,
        setting_id: sid,
        arp_always_source_route: props.bool("ArpAlwaysSourceRoute")?,
        arp_use_ether_snap: props.bool("ArpUseEtherSNAP")?,
        database_path: props.string("DatabasePath")?,
        dead_gw_detect_enabled: props.bool("DeadGWDetectEnabled")?,
        default_ip_gateway: read_gateways(&props)?,
        default_tos: props.int("DefaultTOS")?,
        default_ttl: props.int("DefaultTTL")?,
        dhcp_enabled: props.bool("DHCPEnabled")?,
        dhcp_lease_expires: props.string("DHCPLeaseExpires")?,
        dhcp_lease_obtained: props.string("DHCPLeaseObtained")?,
        dhcp_server: props.string("DHCPServer")?,
        dns_domain: props.string("DNSDomain")?,
        dns_domain_suffix_search_order: props.strings("DNSDomainSuffixSearchOrder")?,
        dns_enabled_for_wins_resolution: props.bool("DNSEnabledForWINSResolution")?,
        dns_host_name: props.string("DNSHostName")?,
        dns_server_search_order: props.addresses("DNSServerSearchOrder")?,
        domain_dns_registration_enabled: props.bool("DomainDNSRegistrationEnabled")?,
        forward_buffer_memory: props.int("ForwardBufferMemory")?,
        full_dns_registration_enabled: props.bool("FullDNSRegistrationEnabled")?,
        igmp_level: props.int("IGMPLevel")?,
        index: props.int("Index")?,
        interface_index: props.int("InterfaceIndex")?,
        ip_address: read_ip_addresses(&props)?,
        ip_connection_metric: props.int("IPConnectionMetric")?,
        ip_enabled: props.bool("IPEnabled")?,
        ip_filter_security_enabled: props.bool("IPFilterSecurityEnabled")?,
        ip_port_security_enabled: props.bool("IPPortSecurityEnabled")?,
        ip_sec_permit_ip_protocols: props.strings("IPSecPermitIPProtocols")?,
        ip_sec_permit_tcp_ports: props.strings("IPSecPermitTCPPorts")?,
        ip_sec_permit_udp_ports: props.strings("IPSecPermitUDPPorts")?,
        ip_use_zero_broadcast: props.bool("IPUseZeroBroadcast")?,
        keep_alive_interval: props.int("KeepAliveInterval")?,
        keep_alive_time: props.int("KeepAliveTime")?,
        mac_address: props.string("MACAddress")?,
        mtu: props.int("MTU")?,
        num_forward_packets: props.int("NumForwardPackets")?,
        pmtu_bh_detect_enabled: props.bool("PMTUBHDetectEnabled")?,
        pmtu_discovery_enabled: props.bool("PMTUDiscoveryEnabled")?,
        service_name: props.string("ServiceName")?,
        tcpip_netbios_options: props.int("TcpipNetbiosOptions")?,
        tcp_max_connect_retransmissions: props.int("TcpMaxConnectRetransmissions")?,
        tcp_max_data_retransmissions: props.int("TcpMaxDataRetransmissions")?,
        tcp_num_connections: props.int("TcpNumConnections")?,
        tcp_use_rfc1122_urgent_pointer: props.bool("TcpUseRFC1122UrgentPointer")?,
        tcp_window_size: props.int("TcpWindowSize")?,
        wins_enable_lmhosts_lookup: props.bool("WINSEnableLMHostsLookup")?,
        wins_host_lookup_file: props.string("WINSHostLookupFile")?,
        wins_primary_server: props.string("WINSPrimaryServer")?,
        wins_scope_id: props.string("WINSScopeID")?,
        wins_secondary_server: props.string("WINSSecondaryServer")?,
    }))
}

/// Reads every object of a result set, in order.
///
/// # Errors
///
/// Stops at the first object that fails to read.
pub fn read_configurations<I>(sources: I) -> Result<Vec<NetworkAdapterConfiguration>, ConfigurationError>
where
    I: IntoIterator,
    I::Item: PropertySource,
{
    let configurations: Vec<_> = sources
        .into_iter()
        .filter_map(|source| read_configuration(&source, None).transpose())
        .collect::<Result<_, _>>()?;
    tracing::debug!(count = configurations.len(), "read adapter configurations");
    Ok(configurations)
}

/// Returns the first object whose `SettingID` matches `setting_id`.
///
/// # Errors
///
/// Returns [`ConfigurationError::NotFound`] when no object matches, or the
/// first read error encountered before the match.
pub fn find_configuration<I>(
    sources: I,
    setting_id: &str,
) -> Result<NetworkAdapterConfiguration, ConfigurationError>
where
    I: IntoIterator,
    I::Item: PropertySource,
{
    for source in sources {
        if let Some(configuration) = read_configuration(&source, Some(setting_id))? {
            return Ok(configuration);
        }
    }

    Err(ConfigurationError::NotFound {
        setting_id: setting_id.to_string(),
    })
}
