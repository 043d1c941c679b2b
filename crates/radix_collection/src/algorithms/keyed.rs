use crate::key::{Entry, RadixKey};
use crate::list::{LinkedSeq, NodeId};
use crate::RadixError;

use super::entries::{self, SortedEntries};
use super::{permute, splice};

pub fn sort_slice<T, K, F>(
    data: &mut [T],
    key: F,
    mem1: Option<&mut [Entry<usize, K>]>,
    mem2: Option<&mut [Entry<usize, K>]>,
) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let SortedEntries {
        mut sorted,
        mut spare,
    } = entries::build_sorted(data.iter().enumerate(), len, key, mem1, mem2)?;
    permute::apply(data, &mut sorted, &mut spare);
    Ok(())
}

pub fn sort_indices<T, K, F>(
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
    let len = data.len();
    if out.len() < len {
        return Err(RadixError::OutputTooSmall {
            needed: len,
            got: out.len(),
        });
    }
    if len < 2 {
        for (i, slot) in out[..len].iter_mut().enumerate() {
            *slot = i;
        }
        return Ok(());
    }

    let SortedEntries { sorted, .. } =
        entries::build_sorted(data.iter().enumerate(), len, key, mem1, mem2)?;
    permute::emit_indices(&sorted, out);
    Ok(())
}

pub fn sort_list<T, K, F>(
    list: &mut LinkedSeq<T>,
    key: F,
    mem1: Option<&mut [Entry<NodeId, K>]>,
    mem2: Option<&mut [Entry<NodeId, K>]>,
) -> Result<(), RadixError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    let len = list.len();
    if len < 2 {
        return Ok(());
    }

    let SortedEntries { sorted, .. } =
        entries::build_sorted(list.iter_with_ids(), len, key, mem1, mem2)?;
    splice::relink(list, &sorted);
    Ok(())
}
