//! Setting DNS servers through `Win32_NetworkAdapterConfiguration`.

use std::net::IpAddr;

use super::reader::{Properties, normalize_setting_id};
use super::{ConfigurationError, MethodSource, PropertyValue};

const SET_DNS_SERVER_SEARCH_ORDER: &str = "SetDNSServerSearchOrder";

/// Sets the DNS server search order of the object whose `SettingID`
/// matches `setting_id`.
///
/// With `add`, the object's current `DNSServerSearchOrder` entries are kept
/// ahead of `servers`; otherwise `servers` replaces them. Objects before the
/// match are only asked for their `SettingID`.
///
/// # Errors
///
/// Returns [`ConfigurationError::MethodFailed`] when the method returns a
/// non-zero status, [`ConfigurationError::NotFound`] when no object
/// matches, or the first property or dispatch error.
pub fn set_dns_servers<I>(
    sources: I,
    setting_id: &str,
    servers: &[IpAddr],
    add: bool,
) -> Result<(), ConfigurationError>
where
    I: IntoIterator,
    I::Item: MethodSource,
{
    let wanted = normalize_setting_id(setting_id);

    for source in sources {
        let props = Properties::new(&source);
        if normalize_setting_id(&props.string("SettingID")?) != wanted {
            continue;
        }

        let mut order = if add {
            props.strings("DNSServerSearchOrder")?.unwrap_or_default()
        } else {
            Vec::new()
        };
        order.extend(servers.iter().map(ToString::to_string));

        tracing::debug!(setting_id = %wanted, servers = ?order, add, "setting DNS servers");
        let code = source.call_method(SET_DNS_SERVER_SEARCH_ORDER, &[PropertyValue::from(order)])?;
        if code != 0 {
            return Err(ConfigurationError::MethodFailed {
                method: SET_DNS_SERVER_SEARCH_ORDER,
                code,
            });
        }
        return Ok(());
    }

    Err(ConfigurationError::NotFound {
        setting_id: setting_id.to_string(),
    })
}
