//! Native structure descriptors.
//!
//! Each [`RecordLayout`] states the byte size and field offsets of one native
//! structure as declared by the Windows SDK headers (`iptypes.h`,
//! `netioapi.h`, `ws2def.h`, `ws2ipdef.h`). Layouts differ between 32-bit and
//! 64-bit targets because of pointer width, so one table exists per pointer
//! width and the build selects exactly one of them as [`current`].
//!
//! The tables are declarative. The mirrors in [`super::raw`] are checked
//! against them by [`RecordLayout::check`].

pub mod x64;
pub mod x86;

#[cfg(target_pointer_width = "64")]
pub use x64 as current;

#[cfg(target_pointer_width = "32")]
pub use x86 as current;

use super::MarshalError;

/// Byte offset of one named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field name as spelled in the SDK header.
    pub name: &'static str,
    /// Byte offset from the start of the record.
    pub offset: usize,
}

impl FieldLayout {
    /// Creates a field descriptor.
    #[must_use]
    pub const fn new(name: &'static str, offset: usize) -> Self {
        Self { name, offset }
    }
}

/// Size and field offsets of one native structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    /// Structure name as spelled in the SDK header.
    pub name: &'static str,
    /// Total size in bytes, including trailing padding.
    pub size: usize,
    /// Described fields, in declaration order.
    pub fields: &'static [FieldLayout],
}

impl RecordLayout {
    /// Returns the offset of the named field.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::MalformedNativeLayout`] if the field is not described.
    pub fn offset(&self, field: &str) -> Result<usize, MarshalError> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.offset)
            .ok_or_else(|| MarshalError::malformed(self.name, format!("no field named {field}")))
    }

    /// Compares a measured size and measured field offsets with this descriptor.
    ///
    /// Every described field must be measured and every measured field must
    /// be described.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalError::MalformedNativeLayout`] describing the first mismatch.
    pub fn check(&self, size: usize, measured: &[(&str, usize)]) -> Result<(), MarshalError> {
        if size != self.size {
            return Err(MarshalError::malformed(
                self.name,
                format!("size is {size}, expected {}", self.size),
            ));
        }

        for &(name, offset) in measured {
            let expected = self.offset(name)?;
            if offset != expected {
                return Err(MarshalError::malformed(
                    self.name,
                    format!("{name} is at offset {offset}, expected {expected}"),
                ));
            }
        }

        if let Some(missing) = self
            .fields
            .iter()
            .find(|f| !measured.iter().any(|&(name, _)| name == f.name))
        {
            return Err(MarshalError::malformed(
                self.name,
                format!("{} was not measured", missing.name),
            ));
        }

        Ok(())
    }
}
