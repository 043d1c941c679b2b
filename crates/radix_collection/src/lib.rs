//! LSD radix sorts over fixed-width unsigned digits.
//!
//! Three payload shapes are covered: primitive integers sorted in place,
//! arbitrary elements sorted by an unsigned key (in place or as an index
//! permutation), and elements of a [`LinkedSeq`] reordered by relinking.
//! Keyed and list sorts never clone an element; `T` carries no `Clone`
//! bound.
//!
//! Every operation needs scratch memory. The `*_with_scratch` variants take
//! caller-owned slices and do not allocate; the plain variants allocate for
//! the duration of the call and release before returning. Allocation failure
//! is reported as [`RadixError::Alloc`] rather than aborting.

mod algorithms;
mod error;
mod key;
mod list;
mod scratch;

pub use error::RadixError;
pub use key::{Entry, RadixInt, RadixKey};
pub use list::{Ids, IntoIter, Iter, LinkedSeq, NodeId};
pub use scratch::Scratch;

/// Bits per digit; one counting pass per digit.
pub const RADIX_BITS: usize = 8;
pub const BUCKETS: usize = 1 << RADIX_BITS;
/// Lower bound on digit rounds, whatever the key width.
pub const MIN_ROUNDS: usize = 2;

/// Sorts `data` ascending in place.
///
/// Signed types are handled by sorting magnitudes of the negative zone
/// separately; `T::MIN` is never negated.
pub fn sort_integers<T: RadixInt>(data: &mut [T]) -> Result<(), RadixError> {
    algorithms::integer::sort(data, None)
}

/// [`sort_integers`] using `scratch` (at least `data.len()` items) instead of
/// allocating. A shorter `scratch` is rejected for any input of two or more
/// items, sorted or not.
pub fn sort_integers_with_scratch<T: RadixInt>(
    data: &mut [T],
    scratch: &mut [T],
) -> Result<(), RadixError> {
    algorithms::integer::sort(data, Some(scratch))
}

/// Stable in-place sort of `data` by `key`.
pub fn sort_by_key<T, K, F>(data: &mut [T], key: F) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    algorithms::keyed::sort_slice(data, key, None, None)
}

/// [`sort_by_key`] with optional caller scratch; each buffer must hold at
/// least `data.len()` entries. A `None` buffer is allocated transiently.
pub fn sort_by_key_with_scratch<T, K, F>(
    data: &mut [T],
    key: F,
    mem1: Option<&mut [Entry<usize, K>]>,
    mem2: Option<&mut [Entry<usize, K>]>,
) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    algorithms::keyed::sort_slice(data, key, mem1, mem2)
}

/// Writes into `out[..data.len()]` the indices of `data` in stable key order,
/// leaving `data` untouched.
pub fn sort_indices_by_key<T, K, F>(
    data: &[T],
    key: F,
    out: &mut [usize],
) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    algorithms::keyed::sort_indices(data, key, out, None, None)
}

pub fn sort_indices_by_key_with_scratch<T, K, F>(
    data: &[T],
    key: F,
    out: &mut [usize],
    mem1: Option<&mut [Entry<usize, K>]>,
    mem2: Option<&mut [Entry<usize, K>]>,
) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    algorithms::keyed::sort_indices(data, key, out, mem1, mem2)
}

/// Stable sort of `list` by `key`, relinking nodes without moving values.
/// Every [`NodeId`] stays valid.
pub fn sort_list_by_key<T, K, F>(list: &mut LinkedSeq<T>, key: F) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    algorithms::keyed::sort_list(list, key, None, None)
}

pub fn sort_list_by_key_with_scratch<T, K, F>(
    list: &mut LinkedSeq<T>,
    key: F,
    mem1: Option<&mut [Entry<NodeId, K>]>,
    mem2: Option<&mut [Entry<NodeId, K>]>,
) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    algorithms::keyed::sort_list(list, key, mem1, mem2)
}
