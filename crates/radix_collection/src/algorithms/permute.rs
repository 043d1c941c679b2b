use crate::key::Entry;

/// Reorders `data` so slot `i` receives the element originally at
/// `sorted[i].loc`.
///
/// Elements are relocated with `slice::swap` only, at most `len - 1` swaps,
/// and `T` is never cloned. Both entry buffers are consumed as the locator
/// table:
///
/// - `spare[o].loc`: final slot of the element originally at `o`.
/// - `sorted[s].loc`: original index of the element residing in slot `s`,
///   swapped in lockstep with `data`.
///
/// Returns the number of swaps performed.
pub fn apply<T, K: Copy>(
    data: &mut [T],
    sorted: &mut [Entry<usize, K>],
    spare: &mut [Entry<usize, K>],
) -> usize {
    let len = data.len();
    debug_assert_eq!(sorted.len(), len);
    debug_assert_eq!(spare.len(), len);

    for (slot, entry) in sorted.iter().enumerate() {
        spare[entry.loc].loc = slot;
    }
    for (slot, entry) in sorted.iter_mut().enumerate() {
        entry.loc = slot;
    }

    let mut swaps = 0;
    for slot in 0..len {
        // Every swap parks one element at its final slot, so each cycle
        // closes after its length minus one swaps.
        loop {
            let owner = sorted[slot].loc;
            let dest = spare[owner].loc;
            if dest == slot {
                break;
            }
            data.swap(slot, dest);
            sorted.swap(slot, dest);
            swaps += 1;
        }
    }
    swaps
}

/// Writes the original indices of `sorted` into `out`.
pub fn emit_indices<K>(sorted: &[Entry<usize, K>], out: &mut [usize]) {
    for (slot, entry) in out.iter_mut().zip(sorted) {
        *slot = entry.loc;
    }
}
