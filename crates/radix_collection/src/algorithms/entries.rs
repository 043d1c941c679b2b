use crate::key::{Entry, RadixKey};
use crate::{RadixError, Scratch};

use super::lsd;

/// Both scratch buffers of a keyed sort. `sorted` holds the key-ordered
/// entries; `spare` is free for the output stage.
pub struct SortedEntries<'m, L, K> {
    pub sorted: Scratch<'m, Entry<L, K>>,
    pub spare: Scratch<'m, Entry<L, K>>,
}

/// Builds one entry per item, then digit-sorts them by key.
///
/// `items` yields each element with its location in original order and must
/// yield exactly `len` items.
pub fn build_sorted<'a, 'm, L, T, K, F, I>(
    items: I,
    len: usize,
    mut key: F,
    mem1: Option<&'m mut [Entry<L, K>]>,
    mem2: Option<&'m mut [Entry<L, K>]>,
) -> Result<SortedEntries<'m, L, K>, RadixError>
where
    L: Copy + Default,
    T: 'a + ?Sized,
    K: RadixKey,
    F: FnMut(&T) -> K,
    I: Iterator<Item = (L, &'a T)>,
{
    let mut sorted = Scratch::acquire(mem1, len)?;
    let mut spare = Scratch::acquire(mem2, len)?;

    let mut filled = 0;
    for ((loc, item), slot) in items.zip(sorted.iter_mut()) {
        *slot = Entry {
            loc,
            key: key(item),
        };
        filled += 1;
    }
    debug_assert_eq!(filled, len);

    lsd::sort(&mut sorted, &mut spare);
    Ok(SortedEntries { sorted, spare })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_carry_original_index() {
        let words = ["pear", "fig", "banana", "kiwi"];
        let SortedEntries { sorted, .. } = build_sorted(
            words.iter().enumerate(),
            words.len(),
            |w: &&str| w.len() as u8,
            None,
            None,
        )
        .unwrap();
        let order: Vec<usize> = sorted.iter().map(|e| e.loc).collect();
        let keys: Vec<u8> = sorted.iter().map(|e| e.key).collect();
        assert_eq!(order, vec![1, 0, 3, 2]);
        assert_eq!(keys, vec![3, 4, 4, 6]);
    }

    #[test]
    fn second_buffer_checked_too() {
        let data = [3_u32, 1, 2];
        let mut mem1 = vec![Entry::default(); 3];
        let mut mem2 = vec![Entry::default(); 1];
        let err = build_sorted(
            data.iter().enumerate(),
            data.len(),
            |x: &u32| *x,
            Some(mem1.as_mut_slice()),
            Some(mem2.as_mut_slice()),
        )
        .err();
        let expected = RadixError::ScratchTooSmall { needed: 3, got: 1 };
        assert_eq!(err, Some(expected));
    }
}
