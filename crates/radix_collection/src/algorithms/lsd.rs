use log::trace;

use crate::BUCKETS;
use crate::key::Digits;

use super::common;

/// Sorts `data` by every digit of its items, least significant first.
///
/// `aux` must have the same length as `data` and is clobbered. The result
/// always ends up in `data`, whatever number of rounds actually moved items.
pub fn sort<E: Digits>(data: &mut [E], aux: &mut [E]) {
    debug_assert_eq!(data.len(), aux.len());
    if data.len() < 2 {
        return;
    }

    let mut src_is_data = true;
    for round in 0..E::ROUNDS {
        let moved = if src_is_data {
            digit_pass(data, aux, round)
        } else {
            digit_pass(aux, data, round)
        };

        if moved {
            src_is_data = !src_is_data;
        } else {
            trace!(
                "round {round} skipped: single bucket over {} items",
                data.len()
            );
        }
    }

    if !src_is_data {
        data.copy_from_slice(aux);
    }
}

/// One stable counting pass of `src` into `dst` by digit `round`.
///
/// Returns `false` and leaves `dst` alone when all items share the digit,
/// since scattering would be the identity.
pub fn digit_pass<E: Digits>(src: &[E], dst: &mut [E], round: usize) -> bool {
    debug_assert_eq!(src.len(), dst.len());

    let mut offsets = [0usize; BUCKETS];
    common::count_digits(src, &mut offsets, round);
    if offsets.iter().any(|&c| c == src.len()) {
        return false;
    }
    common::prefix_sum(&mut offsets);
    scatter(src, dst, &mut offsets, round);
    true
}

#[inline]
fn scatter<E: Digits>(src: &[E], dst: &mut [E], offsets: &mut [usize; BUCKETS], round: usize) {
    for x in src {
        let digit = x.digit(round);
        let pos = offsets[digit];
        dst[pos] = *x;
        offsets[digit] = pos + 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::Entry;

    #[test]
    fn digit_pass_is_stable() {
        let src: Vec<Entry<usize, u16>> = [0x0102, 0x0201, 0x0302, 0x0001]
            .into_iter()
            .enumerate()
            .map(|(loc, key)| Entry { loc, key })
            .collect();
        let mut dst = vec![Entry::default(); 4];
        assert!(digit_pass(&src, &mut dst, 0));
        let locs: Vec<usize> = dst.iter().map(|e| e.loc).collect();
        assert_eq!(locs, vec![1, 3, 0, 2]);
    }

    #[test]
    fn digit_pass_skips_single_bucket() {
        let src = [0x10_u32, 0x20, 0x30];
        let mut dst = [0_u32; 3];
        assert!(!digit_pass(&src, &mut dst, 2));
        assert_eq!(dst, [0, 0, 0]);
    }

    #[test]
    fn result_lands_in_data_with_odd_moving_rounds() {
        // Only round 0 moves anything for a u64 in 0..256.
        let mut data = vec![5_u64, 3, 255, 0, 3];
        let mut aux = vec![0_u64; data.len()];
        sort(&mut data, &mut aux);
        assert_eq!(data, vec![0, 3, 3, 5, 255]);
    }

    #[test]
    fn random_entries_sort_stably() {
        let mut rng = StdRng::seed_from_u64(0x15D0_2026);
        for &size in &[2_usize, 3, 17, 256, 1000] {
            let mut data: Vec<Entry<usize, u32>> = (0..size)
                .map(|i| Entry {
                    loc: i,
                    key: rng.random_range(0..64_u32) << (8 * rng.random_range(0..4_u32)),
                })
                .collect();
            let mut expected = data.clone();
            expected.sort_by_key(|e| e.key);

            let mut aux = vec![Entry::default(); size];
            sort(&mut data, &mut aux);
            assert_eq!(data, expected, "size={size}");
        }
    }
}
