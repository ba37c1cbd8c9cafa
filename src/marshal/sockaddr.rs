//! Socket address decoding and encoding.
//!
//! Native socket addresses carry a family tag at offset 0; the tag selects
//! the fixed layout of the rest of the record.

use std::mem::size_of;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use ipnet::IpNet;

use super::MarshalError;
use super::raw::{
    RawIpAddressPrefix, RawSockaddr, RawSockaddrIn, RawSockaddrIn6, RawSockaddrInet,
    RawSocketAddress,
};

/// Unspecified address family (`AF_UNSPEC`).
pub const AF_UNSPEC: u16 = 0;

/// IPv4 address family (`AF_INET`).
pub const AF_INET: u16 = 2;

/// IPv6 address family (`AF_INET6`) as numbered by Winsock.
pub const AF_INET6: u16 = 23;

impl RawSockaddrIn {
    /// Decodes into a portable socket address.
    #[must_use]
    pub fn to_socket_addr(&self) -> SocketAddrV4 {
        let [a, b, c, d] = self.sin_addr;
        SocketAddrV4::new(Ipv4Addr::new(a, b, c, d), u16::from_be(self.sin_port))
    }
}

impl From<SocketAddrV4> for RawSockaddrIn {
    fn from(addr: SocketAddrV4) -> Self {
        Self {
            sin_family: AF_INET,
            sin_port: addr.port().to_be(),
            sin_addr: addr.ip().octets(),
            sin_zero: [0; 8],
        }
    }
}

impl RawSockaddrIn6 {
    /// Decodes into a portable socket address.
    #[must_use]
    pub fn to_socket_addr(&self) -> SocketAddrV6 {
        SocketAddrV6::new(
            Ipv6Addr::from(self.sin6_addr),
            u16::from_be(self.sin6_port),
            self.sin6_flowinfo,
            self.sin6_scope_id,
        )
    }
}

impl From<SocketAddrV6> for RawSockaddrIn6 {
    fn from(addr: SocketAddrV6) -> Self {
        Self {
            sin6_family: AF_INET6,
            sin6_port: addr.port().to_be(),
            sin6_flowinfo: addr.flowinfo(),
            sin6_addr: addr.ip().octets(),
            sin6_scope_id: addr.scope_id(),
        }
    }
}

impl RawSockaddrInet {
    /// Returns the family tag shared by both union variants.
    #[must_use]
    pub fn family(&self) -> u16 {
        // SAFETY: every variant starts with the 16-bit family tag.
        unsafe { self.si_family }
    }

    /// Decodes the variant selected by the family tag.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::UnsupportedAddressFamily`] for tags other than
    /// `AF_INET` and `AF_INET6`.
    pub fn to_socket_addr(&self) -> Result<SocketAddr, MarshalError> {
        match self.family() {
            // SAFETY: the tag says the IPv4 variant is active.
            AF_INET => Ok(SocketAddr::V4(unsafe { self.ipv4 }.to_socket_addr())),
            // SAFETY: the tag says the IPv6 variant is active.
            AF_INET6 => Ok(SocketAddr::V6(unsafe { self.ipv6 }.to_socket_addr())),
            family => Err(MarshalError::UnsupportedAddressFamily { family }),
        }
    }

    /// Decodes only the IP address, dropping port, flow info and scope.
    ///
    /// # Errors
    ///
    /// Same as [`Self::to_socket_addr`].
    pub fn to_ip_addr(&self) -> Result<IpAddr, MarshalError> {
        self.to_socket_addr().map(|addr| addr.ip())
    }
}

impl From<SocketAddr> for RawSockaddrInet {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => {
                let mut raw = Self::default();
                raw.ipv4 = RawSockaddrIn::from(v4);
                raw
            }
            SocketAddr::V6(v6) => Self {
                ipv6: RawSockaddrIn6::from(v6),
            },
        }
    }
}

impl From<IpAddr> for RawSockaddrInet {
    fn from(addr: IpAddr) -> Self {
        Self::from(SocketAddr::new(addr, 0))
    }
}

impl RawIpAddressPrefix {
    /// Decodes into an [`IpNet`].
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::UnsupportedAddressFamily`] for unknown family
    /// tags and [`MarshalError::InvalidPrefixLength`] when the prefix length
    /// is longer than the address.
    pub fn to_ip_net(&self) -> Result<IpNet, MarshalError> {
        let address = self.prefix.to_ip_addr()?;
        IpNet::new(address, self.prefix_length).map_err(|_| MarshalError::InvalidPrefixLength {
            address,
            length: self.prefix_length,
        })
    }
}

impl From<IpNet> for RawIpAddressPrefix {
    fn from(net: IpNet) -> Self {
        Self {
            prefix: RawSockaddrInet::from(net.addr()),
            prefix_length: net.prefix_len(),
        }
    }
}

impl RawSocketAddress {
    /// Decodes the referenced socket address.
    ///
    /// A null `lpSockaddr` means the address is absent and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::UnsupportedAddressFamily`] for unknown family
    /// tags, and [`MarshalError::MalformedNativeLayout`] when the declared
    /// length is too short for the family's record.
    ///
    /// # Safety
    ///
    /// A non-null `lp_sockaddr` must point to readable memory of at least
    /// `i_sockaddr_length` bytes that stays alive for the duration of the call.
    pub unsafe fn decode(&self) -> Result<Option<SocketAddr>, MarshalError> {
        if self.lp_sockaddr.is_null() {
            return Ok(None);
        }

        // SAFETY: non-null and readable per the caller's contract; every
        // sockaddr starts with the family tag. Unaligned reads avoid assuming
        // anything about the producer's alignment.
        let family = unsafe { self.lp_sockaddr.cast::<u16>().read_unaligned() };
        let declared = usize::try_from(self.i_sockaddr_length).unwrap_or(0);

        match family {
            AF_INET => {
                check_length::<RawSockaddrIn>("SOCKADDR_IN", declared)?;
                // SAFETY: the length check guarantees a whole SOCKADDR_IN.
                let raw = unsafe { self.lp_sockaddr.cast::<RawSockaddrIn>().read_unaligned() };
                Ok(Some(SocketAddr::V4(raw.to_socket_addr())))
            }
            AF_INET6 => {
                check_length::<RawSockaddrIn6>("SOCKADDR_IN6", declared)?;
                // SAFETY: the length check guarantees a whole SOCKADDR_IN6.
                let raw = unsafe { self.lp_sockaddr.cast::<RawSockaddrIn6>().read_unaligned() };
                Ok(Some(SocketAddr::V6(raw.to_socket_addr())))
            }
            family => Err(MarshalError::UnsupportedAddressFamily { family }),
        }
    }

    /// Builds a view over an owned `SOCKADDR_INET`.
    ///
    /// The returned value borrows `storage` by address only; it must not
    /// outlive it.
    #[must_use]
    pub fn pointing_to(storage: &RawSockaddrInet) -> Self {
        let length = match storage.family() {
            AF_INET => size_of::<RawSockaddrIn>(),
            _ => size_of::<RawSockaddrIn6>(),
        };
        Self {
            lp_sockaddr: std::ptr::from_ref(storage).cast::<RawSockaddr>(),
            i_sockaddr_length: i32::try_from(length).unwrap_or(i32::MAX),
        }
    }
}

fn check_length<T>(record: &'static str, declared: usize) -> Result<(), MarshalError> {
    let required = size_of::<T>();
    if declared < required {
        return Err(MarshalError::malformed(
            record,
            format!("iSockaddrLength is {declared}, need at least {required}"),
        ));
    }
    Ok(())
}
