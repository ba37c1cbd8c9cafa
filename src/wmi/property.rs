//! Property values and the source they are read from.

use std::collections::{BTreeMap, HashMap};

use super::ConfigurationError;

/// A property value as delivered by a WMI object.
///
/// Integers of every width arrive as [`PropertyValue::Int`]; the reader
/// narrows them to the field type and rejects values that do not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// The property is present but has no value.
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    Array(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::String(_) => "string",
            Self::Array(_) => "array",
        }
    }

    /// Returns true for [`PropertyValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A single WMI object exposing named properties.
///
/// The COM/automation plumbing lives behind this trait; the reader only
/// ever asks for properties by name.
pub trait PropertySource {
    /// Returns the value of the named property.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Property`] when the source cannot
    /// produce the property.
    fn property(&self, name: &str) -> Result<PropertyValue, ConfigurationError>;
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn property(&self, name: &str) -> Result<PropertyValue, ConfigurationError> {
        (*self).property(name)
    }
}

/// A WMI object that also exposes methods.
///
/// Arguments are passed positionally; the method's numeric return value
/// comes back as is, with zero meaning success.
pub trait MethodSource: PropertySource {
    /// Invokes the named method.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Property`] when the source cannot
    /// dispatch the call at all.
    fn call_method(&self, name: &str, args: &[PropertyValue]) -> Result<i64, ConfigurationError>;
}

impl<T: MethodSource + ?Sized> MethodSource for &T {
    fn call_method(&self, name: &str, args: &[PropertyValue]) -> Result<i64, ConfigurationError> {
        (*self).call_method(name, args)
    }
}

/// Missing keys are reported as errors, not as [`PropertyValue::Null`].
impl PropertySource for HashMap<String, PropertyValue> {
    fn property(&self, name: &str) -> Result<PropertyValue, ConfigurationError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::property(name, "no such property"))
    }
}

impl PropertySource for BTreeMap<String, PropertyValue> {
    fn property(&self, name: &str) -> Result<PropertyValue, ConfigurationError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::property(name, "no such property"))
    }
}
