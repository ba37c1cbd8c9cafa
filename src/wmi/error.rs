//! Error types for reading adapter configuration objects.

use thiserror::Error;

/// Error type for [`read_configuration`](super::read_configuration).
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The property source could not produce a property.
    #[error("Failed to read property '{name}': {reason}")]
    Property {
        /// Property name
        name: String,
        /// Reason reported by the source
        reason: String,
    },

    /// A property had an unexpected variant.
    #[error("Property '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Property name
        name: &'static str,
        /// Expected value kind
        expected: &'static str,
        /// Kind actually found
        found: &'static str,
    },

    /// An integer property did not fit the field it maps to.
    #[error("Property '{name}': value {value} is out of range")]
    OutOfRange {
        /// Property name
        name: &'static str,
        /// Value as returned by the source
        value: i64,
    },

    /// An address, mask or prefix string could not be parsed.
    #[error("Property '{name}': invalid address '{value}'")]
    InvalidAddress {
        /// Property name
        name: &'static str,
        /// The offending string
        value: String,
    },

    /// Two parallel array properties disagree.
    #[error("{primary} has {} while {secondary} has {}", count(.primary_len), count(.secondary_len))]
    MismatchedArrays {
        /// The array whose entries are being read
        primary: &'static str,
        /// The array paired with it entry by entry
        secondary: &'static str,
        /// Length of `primary`, `None` when null
        primary_len: Option<usize>,
        /// Length of `secondary`, `None` when null
        secondary_len: Option<usize>,
    },

    /// A WMI method returned a non-zero status.
    #[error("{method} returned {code}")]
    MethodFailed {
        /// Method name
        method: &'static str,
        /// Status returned by the method
        code: i64,
    },

    /// No configuration object carried the requested setting id.
    #[error("No adapter configuration with setting id '{setting_id}'")]
    NotFound {
        /// The requested id
        setting_id: String,
    },
}

#[allow(clippy::ref_option)]
fn count(len: &Option<usize>) -> String {
    len.map_or_else(|| "null".to_string(), |len| format!("{len} items"))
}

impl ConfigurationError {
    /// Creates a `Property` error for a source failure.
    #[must_use]
    pub fn property(name: &str, reason: impl Into<String>) -> Self {
        Self::Property {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
