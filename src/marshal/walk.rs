//! Traversal of native record collections.
//!
//! Two shapes exist: singly linked lists whose `Next` field is an absolute
//! address, and contiguous row arrays described by a count. Both walkers
//! convert each record into an owned value as soon as it is reached, so no
//! reference into the native buffer survives the walk.

use std::mem::size_of;

use super::MarshalError;
use super::raw::LinkedRecord;

/// Upper bound on the number of nodes followed in one linked list.
///
/// Far above anything the system produces; only a corrupt or cyclic list
/// reaches it.
pub const MAX_LIST_LENGTH: usize = 65_536;

/// Walks a linked list from `head`, converting every node.
///
/// A null `head` yields an empty vector. Any conversion error aborts the
/// whole walk; a partial list is never returned.
///
/// # Errors
///
/// Returns the first conversion error, or [`MarshalError::ListTooLong`] if
/// the list does not terminate within [`MAX_LIST_LENGTH`] nodes.
///
/// # Safety
///
/// Every node reachable from `head` must be a valid, aligned `T` that stays
/// alive and unmodified for the duration of the call.
pub unsafe fn collect_linked<T, V, F>(head: *const T, mut convert: F) -> Result<Vec<V>, MarshalError>
where
    T: LinkedRecord,
    F: FnMut(&T) -> Result<V, MarshalError>,
{
    let mut values = Vec::new();
    let mut current = head;

    while !current.is_null() {
        if values.len() == MAX_LIST_LENGTH {
            tracing::warn!(record = T::NAME, limit = MAX_LIST_LENGTH, "linked list bound exceeded");
            return Err(MarshalError::ListTooLong {
                record: T::NAME,
                limit: MAX_LIST_LENGTH,
            });
        }

        // SAFETY: non-null and valid per the caller's contract.
        let node = unsafe { &*current };
        values.push(convert(node)?);
        current = node.next();
    }

    Ok(values)
}

/// Walks `count` rows laid out `stride` bytes apart starting at `first`.
///
/// A zero `count` yields an empty vector without reading `first`.
///
/// # Errors
///
/// Returns [`MarshalError::MalformedNativeLayout`] if `stride` is smaller
/// than `T`, or the first conversion error.
///
/// # Safety
///
/// When `count` is non-zero, `first + i * stride` must be a valid, aligned `T`
/// for every `i < count`, alive for the duration of the call.
pub unsafe fn collect_contiguous<T, V, F>(
    record: &'static str,
    first: *const T,
    count: usize,
    stride: usize,
    mut convert: F,
) -> Result<Vec<V>, MarshalError>
where
    F: FnMut(&T) -> Result<V, MarshalError>,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    if stride < size_of::<T>() {
        return Err(MarshalError::malformed(
            record,
            format!("row stride {stride} is smaller than the {} byte row", size_of::<T>()),
        ));
    }

    if first.is_null() {
        return Err(MarshalError::malformed(record, format!("{count} rows at a null address")));
    }

    let base = first.cast::<u8>();
    let mut values = Vec::with_capacity(count);

    for index in 0..count {
        // SAFETY: in bounds and valid per the caller's contract.
        let row = unsafe { &*base.add(index * stride).cast::<T>() };
        values.push(convert(row)?);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;
    use crate::marshal::raw::{RawIpAdapterPrefix, RawSocketAddress};

    /// Builds `lengths.len()` prefix nodes chained in order.
    ///
    /// Nodes are boxed so their addresses stay fixed while linking.
    fn chain(lengths: &[u32]) -> Vec<Box<RawIpAdapterPrefix>> {
        let mut nodes: Vec<Box<RawIpAdapterPrefix>> = lengths
            .iter()
            .map(|&prefix_length| {
                Box::new(RawIpAdapterPrefix {
                    length: 0,
                    flags: 0,
                    next: ptr::null(),
                    address: RawSocketAddress::default(),
                    prefix_length,
                })
            })
            .collect();

        for i in (1..nodes.len()).rev() {
            let next: *const RawIpAdapterPrefix = &raw const *nodes[i];
            nodes[i - 1].next = next;
        }
        nodes
    }

    mod linked {
        use super::*;

        #[test]
        fn null_head_is_empty() {
            // SAFETY: null head is never dereferenced.
            let values = unsafe {
                collect_linked(ptr::null::<RawIpAdapterPrefix>(), |n| Ok(n.prefix_length))
            };
            assert_eq!(values, Ok(vec![]));
        }

        #[test]
        fn visits_every_node_in_list_order() {
            let nodes = chain(&[8, 16, 24, 32, 64]);

            // SAFETY: `nodes` outlives the walk.
            let values = unsafe { collect_linked(&raw const *nodes[0], |n| Ok(n.prefix_length)) };
            assert_eq!(values, Ok(vec![8, 16, 24, 32, 64]));
        }

        #[test]
        fn conversion_error_discards_partial_results() {
            let nodes = chain(&[8, 99, 24]);

            // SAFETY: `nodes` outlives the walk.
            let values = unsafe {
                collect_linked(&raw const *nodes[0], |n| {
                    if n.prefix_length == 99 {
                        Err(MarshalError::UnsupportedAddressFamily { family: 99 })
                    } else {
                        Ok(n.prefix_length)
                    }
                })
            };
            assert_eq!(values, Err(MarshalError::UnsupportedAddressFamily { family: 99 }));
        }

        #[test]
        fn cyclic_list_hits_the_bound() {
            let mut nodes = chain(&[1, 2]);
            let first: *const RawIpAdapterPrefix = &raw const *nodes[0];
            nodes[1].next = first;

            // SAFETY: `nodes` outlives the walk; the cycle is cut by the bound.
            let values = unsafe { collect_linked(first, |n| Ok(n.prefix_length)) };
            assert_eq!(
                values,
                Err(MarshalError::ListTooLong {
                    record: "IP_ADAPTER_PREFIX_XP",
                    limit: MAX_LIST_LENGTH,
                })
            );
        }
    }

    mod contiguous {
        use super::*;

        #[test]
        fn zero_count_never_reads_the_pointer() {
            // SAFETY: count is zero, so `first` is never read.
            let values = unsafe {
                collect_contiguous("u32", ptr::null::<u32>(), 0, size_of::<u32>(), |v| Ok(*v))
            };
            assert_eq!(values, Ok(vec![]));
        }

        #[test]
        fn reads_rows_by_index() {
            let rows = [10u64, 20, 30];

            // SAFETY: `rows` holds three u64 values.
            let values =
                unsafe { collect_contiguous("u64", rows.as_ptr(), rows.len(), 8, |v| Ok(*v)) };
            assert_eq!(values, Ok(vec![10, 20, 30]));
        }

        #[test]
        fn honours_a_stride_wider_than_the_row() {
            let rows = [1u32, 0xdead, 2, 0xbeef, 3, 0xf00d];

            // SAFETY: three rows of two u32 each.
            let values = unsafe { collect_contiguous("pair", rows.as_ptr(), 3, 8, |v| Ok(*v)) };
            assert_eq!(values, Ok(vec![1, 2, 3]));
        }

        #[test]
        fn short_stride_is_malformed() {
            let rows = [1u64, 2];

            // SAFETY: rejected before any read.
            let error = unsafe { collect_contiguous("u64", rows.as_ptr(), 2, 4, |v| Ok(*v)) };
            assert!(matches!(
                error,
                Err(MarshalError::MalformedNativeLayout { record: "u64", .. })
            ));
        }

        #[test]
        fn null_rows_with_nonzero_count_are_malformed() {
            // SAFETY: rejected before any read.
            let error = unsafe { collect_contiguous("u32", ptr::null::<u32>(), 2, 4, |v| Ok(*v)) };
            assert!(matches!(error, Err(MarshalError::MalformedNativeLayout { .. })));
        }
    }
}
