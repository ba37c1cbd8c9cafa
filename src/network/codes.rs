//! Native enumeration codes.
//!
//! Each enum covers the values documented in the SDK headers and keeps any
//! other value as `Other(code)`, since newer systems add codes over time.

use serde::Serialize;

macro_rules! native_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// A code this crate does not know, kept verbatim.
            Other(i32),
        }

        impl $name {
            /// Maps a native code to its variant.
            #[must_use]
            pub const fn from_code(code: i32) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Other(other),
                }
            }

            /// Returns the native code.
            #[must_use]
            pub const fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Other(code) => code,
                }
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                Self::from_code(code)
            }
        }
    };
}

native_code! {
    /// Where a unicast address prefix came from (`NL_PREFIX_ORIGIN`).
    pub enum PrefixOrigin {
        /// `IpPrefixOriginOther`.
        Unspecified = 0,
        Manual = 1,
        WellKnown = 2,
        Dhcp = 3,
        RouterAdvertisement = 4,
        Unchanged = 16,
    }
}

native_code! {
    /// Where a unicast address suffix came from (`NL_SUFFIX_ORIGIN`).
    pub enum SuffixOrigin {
        /// `IpSuffixOriginOther`.
        Unspecified = 0,
        Manual = 1,
        WellKnown = 2,
        Dhcp = 3,
        LinkLayerAddress = 4,
        Random = 5,
        Unchanged = 16,
    }
}

native_code! {
    /// Duplicate address detection state (`NL_DAD_STATE`).
    pub enum DadState {
        Invalid = 0,
        Tentative = 1,
        Duplicate = 2,
        Deprecated = 3,
        Preferred = 4,
    }
}

native_code! {
    /// Operational status of an interface (`IF_OPER_STATUS`).
    pub enum OperStatus {
        Up = 1,
        Down = 2,
        Testing = 3,
        Unknown = 4,
        Dormant = 5,
        NotPresent = 6,
        LowerLayerDown = 7,
    }
}

native_code! {
    /// `NET_IF_CONNECTION_TYPE`.
    pub enum ConnectionType {
        Dedicated = 1,
        Passive = 2,
        Demand = 3,
        Maximum = 4,
    }
}

native_code! {
    /// Encapsulation used by a tunnel interface (`TUNNEL_TYPE`).
    pub enum TunnelType {
        None = 0,
        /// `TUNNEL_TYPE_OTHER`.
        Unspecified = 1,
        Direct = 2,
        SixToFour = 11,
        Isatap = 13,
        Teredo = 14,
        IpHttps = 15,
    }
}

native_code! {
    /// Routing protocol that installed a route (`NL_ROUTE_PROTOCOL`).
    pub enum RouteProtocol {
        /// `RouteProtocolOther`.
        Unspecified = 1,
        Local = 2,
        NetMgmt = 3,
        Icmp = 4,
        Egp = 5,
        Ggp = 6,
        Hello = 7,
        Rip = 8,
        IsIs = 9,
        EsIs = 10,
        Cisco = 11,
        Bbn = 12,
        Ospf = 13,
        Bgp = 14,
        Idpr = 15,
        Eigrp = 16,
        Dvmrp = 17,
        Rpl = 18,
        Dhcp = 19,
        NtAutostatic = 10002,
        NtStatic = 10006,
        NtStaticNonDod = 10007,
    }
}

native_code! {
    /// How a route was created (`NL_ROUTE_ORIGIN`).
    pub enum RouteOrigin {
        Manual = 0,
        WellKnown = 1,
        Dhcp = 2,
        RouterAdvertisement = 3,
        SixToFour = 4,
    }
}
