use crate::key::RadixInt;
use crate::{RadixError, Scratch};

use super::{common, lsd};

/// In-place ascending sort of primitive integers.
///
/// Scratch is acquired before the input is touched, so an allocation
/// failure leaves `data` unchanged. Caller scratch is length-checked even
/// when `data` turns out to be sorted already.
pub fn sort<T: RadixInt>(data: &mut [T], scratch: Option<&mut [T]>) -> Result<(), RadixError> {
    let len = data.len();
    if len < 2 {
        return Ok(());
    }
    let got = scratch.as_deref().map_or(len, <[T]>::len);
    if got < len {
        return Err(RadixError::ScratchTooSmall { needed: len, got });
    }
    if common::is_sorted_non_decreasing(data) {
        return Ok(());
    }

    let mut aux = Scratch::acquire(scratch, len)?;
    if T::SIGNED {
        sort_signed(data, &mut aux);
    } else {
        lsd::sort(data, &mut aux);
    }
    Ok(())
}

// Layout while sorting: [MIN values | negated negatives | non-negatives].
fn sort_signed<T: RadixInt>(data: &mut [T], aux: &mut [T]) {
    let neg_end = partition_negatives(data);
    let min_end = isolate_min_and_negate(&mut data[..neg_end]);

    let (aux_neg, aux_pos) = aux.split_at_mut(neg_end);
    lsd::sort(&mut data[min_end..neg_end], &mut aux_neg[min_end..]);
    lsd::sort(&mut data[neg_end..], aux_pos);

    restore_negatives(&mut data[min_end..neg_end]);
}

/// Moves every negative value in front of every non-negative one.
/// Returns the length of the negative zone.
fn partition_negatives<T: RadixInt>(data: &mut [T]) -> usize {
    let mut boundary = 0;
    for i in 0..data.len() {
        if data[i].is_negative() {
            data.swap(boundary, i);
            boundary += 1;
        }
    }
    boundary
}

/// Gathers `T::MIN` at the front of the negative zone and negates the rest
/// into magnitudes. Returns the number of `T::MIN` values.
fn isolate_min_and_negate<T: RadixInt>(neg: &mut [T]) -> usize {
    let mut boundary = 0;
    for i in 0..neg.len() {
        if neg[i] == T::MIN {
            // neg[boundary] was already negated if boundary < i.
            neg.swap(boundary, i);
            boundary += 1;
        } else {
            neg[i] = neg[i].negate();
        }
    }
    boundary
}

/// Ascending magnitudes back to ascending negative values.
fn restore_negatives<T: RadixInt>(zone: &mut [T]) {
    zone.reverse();
    for x in zone.iter_mut() {
        *x = x.negate();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn partition_puts_negatives_first() {
        let mut data = [3_i32, -1, 0, -7, 5, -2];
        let boundary = partition_negatives(&mut data);
        assert_eq!(boundary, 3);
        assert!(data[..boundary].iter().all(|x| *x < 0));
        assert!(data[boundary..].iter().all(|x| *x >= 0));
    }

    #[test]
    fn min_values_are_isolated_untouched() {
        let mut neg = [-3_i8, i8::MIN, -1, i8::MIN, -127];
        let mins = isolate_min_and_negate(&mut neg);
        assert_eq!(mins, 2);
        assert_eq!(&neg[..2], &[i8::MIN, i8::MIN]);
        let mut rest = neg[2..].to_vec();
        rest.sort_unstable();
        assert_eq!(rest, vec![1, 3, 127]);
    }

    #[test]
    fn restore_reverses_and_negates() {
        let mut zone = [1_i64, 3, 3, 9];
        restore_negatives(&mut zone);
        assert_eq!(zone, [-9, -3, -3, -1]);
    }

    #[test]
    fn all_min_values() {
        let mut data = vec![i16::MIN, 4, i16::MIN, -4];
        sort(&mut data, None).unwrap();
        assert_eq!(data, vec![i16::MIN, i16::MIN, -4, 4]);
    }

    #[test]
    fn borrowed_scratch_larger_than_input() {
        let mut rng = StdRng::seed_from_u64(0xA11C_2026);
        let mut data: Vec<i32> = (0..300).map(|_| rng.random()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        let mut scratch = vec![0_i32; 512];
        sort(&mut data, Some(scratch.as_mut_slice())).unwrap();
        assert_eq!(data, expected);
    }

    #[test]
    fn short_scratch_rejected_for_sorted_input() {
        let mut data = vec![-2_i32, 0, 7, 7];
        let mut scratch = vec![0_i32; 2];
        let err = sort(&mut data, Some(scratch.as_mut_slice())).unwrap_err();
        assert_eq!(err, RadixError::ScratchTooSmall { needed: 4, got: 2 });

        let mut single = vec![5_u8];
        let mut empty: Vec<u8> = Vec::new();
        sort(&mut single, Some(empty.as_mut_slice())).unwrap();
    }

    #[test]
    fn short_scratch_leaves_input_untouched() {
        let original = vec![9_i64, -1, i64::MIN, 4];
        let mut data = original.clone();
        let mut scratch = vec![0_i64; 3];
        let err = sort(&mut data, Some(scratch.as_mut_slice())).unwrap_err();
        assert_eq!(err, RadixError::ScratchTooSmall { needed: 4, got: 3 });
        assert_eq!(data, original);
    }
}
