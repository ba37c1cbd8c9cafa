//! Error types for the marshaling layer.

use std::net::IpAddr;

use thiserror::Error;

/// Error type for translating native records into owned values.
///
/// A null list head or a null record pointer is never an error; converters
/// report absent data as `None` or an empty list instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// The address family tag is neither `AF_INET` nor `AF_INET6`.
    ///
    /// Recoverable: newer platform versions may introduce more families.
    #[error("Unsupported address family: {family}")]
    UnsupportedAddressFamily {
        /// The raw family tag read from the record.
        family: u16,
    },

    /// A record's size or field offsets disagree with its descriptor.
    #[error("Malformed native layout for {record}: {detail}")]
    MalformedNativeLayout {
        /// Native structure name (e.g. `IP_ADAPTER_ADDRESSES_LH`).
        record: &'static str,
        /// What did not match.
        detail: String,
    },

    /// A linked list did not terminate within the traversal bound.
    #[error("Linked list of {record} exceeds {limit} records")]
    ListTooLong {
        /// Native structure name of the list nodes.
        record: &'static str,
        /// The traversal bound that was hit.
        limit: usize,
    },

    /// A native string had no terminator within the hard cap.
    #[error("Native string not terminated within {limit} characters")]
    UnterminatedString {
        /// The hard cap on string length.
        limit: usize,
    },

    /// A prefix length exceeds the maximum for its address family.
    #[error("Invalid prefix length {length} for {address}")]
    InvalidPrefixLength {
        /// The prefix address.
        address: IpAddr,
        /// The offending prefix length.
        length: u8,
    },
}

impl MarshalError {
    /// Creates a `MalformedNativeLayout` error.
    #[must_use]
    pub fn malformed(record: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedNativeLayout {
            record,
            detail: detail.into(),
        }
    }
}
