//! Decoding of zero-terminated native strings.

use super::MarshalError;

/// Initial capacity reserved when scanning a pointer-based string.
///
/// Longer strings are still read in full; the buffer grows as needed.
pub const EXPECTED_STRING_LENGTH: usize = 1000;

/// Hard cap on the length of a pointer-based string, in code units.
///
/// Matches the largest `UNICODE_STRING` the system can describe.
pub const MAX_STRING_LENGTH: usize = 32_767;

/// Decodes a fixed-size UTF-16 buffer up to its first zero.
///
/// A buffer without a zero is decoded in full rather than truncated.
#[must_use]
pub fn utf16_fixed_to_string(buffer: &[u16]) -> String {
    let end = buffer.iter().position(|&unit| unit == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..end])
}

/// Decodes a zero-terminated UTF-16 string.
///
/// Returns `Ok(None)` for a null pointer.
///
/// # Errors
///
/// Returns [`MarshalError::UnterminatedString`] if no terminator is found
/// within [`MAX_STRING_LENGTH`] code units.
///
/// # Safety
///
/// A non-null `ptr` must point to a readable sequence of `u16` that either
/// contains a zero or spans at least [`MAX_STRING_LENGTH`] units.
pub unsafe fn utf16_ptr_to_string(ptr: *const u16) -> Result<Option<String>, MarshalError> {
    // SAFETY: forwarded from the caller.
    let units = unsafe { scan_terminated(ptr) }?;
    Ok(units.map(|units| String::from_utf16_lossy(&units)))
}

/// Decodes a zero-terminated single-byte string.
///
/// Bytes that are not valid UTF-8 are replaced, which leaves the ASCII
/// adapter names the system produces untouched.
///
/// # Errors
///
/// Returns [`MarshalError::UnterminatedString`] if no terminator is found
/// within [`MAX_STRING_LENGTH`] bytes.
///
/// # Safety
///
/// Same contract as [`utf16_ptr_to_string`], for bytes.
pub unsafe fn ansi_ptr_to_string(ptr: *const u8) -> Result<Option<String>, MarshalError> {
    // SAFETY: forwarded from the caller.
    let bytes = unsafe { scan_terminated(ptr) }?;
    Ok(bytes.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}

/// Copies code units up to (not including) the terminating zero.
unsafe fn scan_terminated<T>(ptr: *const T) -> Result<Option<Vec<T>>, MarshalError>
where
    T: Copy + Default + PartialEq,
{
    if ptr.is_null() {
        return Ok(None);
    }

    let terminator = T::default();
    let mut units = Vec::with_capacity(EXPECTED_STRING_LENGTH);

    for index in 0..MAX_STRING_LENGTH {
        // SAFETY: every unit up to the terminator is readable per the
        // caller's contract, and reading stops at the terminator.
        let unit = unsafe { ptr.add(index).read_unaligned() };
        if unit == terminator {
            return Ok(Some(units));
        }
        units.push(unit);
    }

    tracing::warn!(limit = MAX_STRING_LENGTH, "native string is not terminated");
    Err(MarshalError::UnterminatedString {
        limit: MAX_STRING_LENGTH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    mod fixed {
        use super::*;

        #[test]
        fn stops_at_first_zero() {
            let mut buffer = [0u16; 16];
            buffer[..4].copy_from_slice(&utf16("eth0"));

            assert_eq!(utf16_fixed_to_string(&buffer), "eth0");
        }

        #[test]
        fn unterminated_buffer_is_not_truncated() {
            let buffer = utf16("corp.example");
            assert_eq!(utf16_fixed_to_string(&buffer), "corp.example");
        }

        #[test]
        fn all_zero_buffer_is_empty() {
            assert_eq!(utf16_fixed_to_string(&[0; 8]), "");
        }
    }

    mod pointer {
        use super::*;

        #[test]
        fn null_is_absent() {
            // SAFETY: null is handled without dereferencing.
            assert_eq!(unsafe { utf16_ptr_to_string(std::ptr::null()) }, Ok(None));
            // SAFETY: as above.
            assert_eq!(unsafe { ansi_ptr_to_string(std::ptr::null()) }, Ok(None));
        }

        #[test]
        fn decodes_wide_string() {
            let mut wide = utf16("Ethernet 2");
            wide.push(0);

            // SAFETY: `wide` is terminated and alive.
            let decoded = unsafe { utf16_ptr_to_string(wide.as_ptr()) };
            assert_eq!(decoded, Ok(Some("Ethernet 2".to_string())));
        }

        #[test]
        fn decodes_ansi_string() {
            let name = b"{4D36E972-E325-11CE-BFC1-08002BE10318}\0";

            // SAFETY: `name` is terminated and static.
            let decoded = unsafe { ansi_ptr_to_string(name.as_ptr()) };
            assert_eq!(
                decoded,
                Ok(Some("{4D36E972-E325-11CE-BFC1-08002BE10318}".to_string()))
            );
        }

        #[test]
        fn string_longer_than_expected_length_is_read_in_full() {
            let long = "x".repeat(EXPECTED_STRING_LENGTH + 250);
            let mut wide = utf16(&long);
            wide.push(0);

            // SAFETY: `wide` is terminated and alive.
            let decoded = unsafe { utf16_ptr_to_string(wide.as_ptr()) }.unwrap();
            assert_eq!(decoded.map(|s| s.len()), Some(EXPECTED_STRING_LENGTH + 250));
        }

        #[test]
        fn missing_terminator_within_cap_is_an_error() {
            let wide = vec![u16::from(b'a'); MAX_STRING_LENGTH];

            // SAFETY: `wide` spans exactly MAX_STRING_LENGTH units.
            let decoded = unsafe { utf16_ptr_to_string(wide.as_ptr()) };
            assert_eq!(
                decoded,
                Err(MarshalError::UnterminatedString {
                    limit: MAX_STRING_LENGTH
                })
            );
        }

        #[test]
        fn empty_string_is_present_but_empty() {
            let wide = [0u16];

            // SAFETY: `wide` is terminated and alive.
            assert_eq!(
                unsafe { utf16_ptr_to_string(wide.as_ptr()) },
                Ok(Some(String::new()))
            );
        }
    }
}
