use crate::BUCKETS;
use crate::key::Digits;

#[inline]
pub fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Histogram of digit `round` over `src`.
#[inline]
pub fn count_digits<E: Digits>(src: &[E], counts: &mut [usize; BUCKETS], round: usize) {
    let mut c0 = [0usize; BUCKETS];
    let mut c1 = [0usize; BUCKETS];
    let mut c2 = [0usize; BUCKETS];
    let mut c3 = [0usize; BUCKETS];

    let mut chunks = src.chunks_exact(4);
    for chunk in &mut chunks {
        c0[chunk[0].digit(round)] += 1;
        c1[chunk[1].digit(round)] += 1;
        c2[chunk[2].digit(round)] += 1;
        c3[chunk[3].digit(round)] += 1;
    }
    for x in chunks.remainder() {
        c0[x.digit(round)] += 1;
    }

    for idx in 0..BUCKETS {
        counts[idx] = c0[idx] + c1[idx] + c2[idx] + c3[idx];
    }
}

/// Turns bucket sizes into bucket start offsets.
#[inline]
pub fn prefix_sum(counts: &mut [usize; BUCKETS]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}
