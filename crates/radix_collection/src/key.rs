use crate::{MIN_ROUNDS, RADIX_BITS};

mod sealed {
    pub trait SealedKey {}
    pub trait SealedInt {}
}

/// Unsigned integer usable as a sort key.
///
/// Sealed to the primitive unsigned types, so a key function returning a
/// signed or floating-point value is rejected at compile time.
pub trait RadixKey: Copy + Ord + Default + sealed::SealedKey {
    /// Width in bytes; one LSD round per byte.
    const BYTES: usize;

    /// Byte `round` of the key, counting from the least significant one.
    /// Rounds past the key width yield `0`.
    fn digit(self, round: usize) -> usize;
}

/// Primitive integer that can be sorted in place by [`crate::sort_integers`].
pub trait RadixInt: Copy + Ord + Default + Digits + sealed::SealedInt {
    const BYTES: usize;
    const SIGNED: bool;
    const MIN: Self;

    fn is_negative(self) -> bool;

    /// Two's-complement negation. Callers never pass `MIN` for signed types.
    fn negate(self) -> Self;
}

/// A `(location, key)` pair moved by the digit rounds.
///
/// `loc` is an array index for slice sorts and a [`crate::NodeId`] for list
/// sorts. Callers only build these to hand in scratch memory, e.g.
/// `vec![Entry::default(); n]`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Entry<L, K> {
    pub loc: L,
    pub key: K,
}

/// Anything a digit round can scatter: plain integers and entries.
///
/// Integers expose the bytes of their two's-complement bit pattern.
pub trait Digits: Copy {
    const ROUNDS: usize;

    fn digit(&self, round: usize) -> usize;
}

#[inline]
pub(crate) const fn rounds_for(bytes: usize) -> usize {
    if bytes < MIN_ROUNDS { MIN_ROUNDS } else { bytes }
}

impl<L: Copy, K: RadixKey> Digits for Entry<L, K> {
    const ROUNDS: usize = rounds_for(K::BYTES);

    #[inline]
    fn digit(&self, round: usize) -> usize {
        self.key.digit(round)
    }
}

macro_rules! impl_radix_key {
    ($($t:ty),*) => {$(
        impl sealed::SealedKey for $t {}

        impl RadixKey for $t {
            const BYTES: usize = std::mem::size_of::<$t>();

            #[inline]
            fn digit(self, round: usize) -> usize {
                if round >= <Self as RadixKey>::BYTES {
                    0
                } else {
                    ((self >> (round * RADIX_BITS)) & 0xFF) as usize
                }
            }
        }
    )*};
}

impl_radix_key!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_radix_int {
    ($($t:ty => $bits:ty, $signed:expr);* $(;)?) => {$(
        impl sealed::SealedInt for $t {}

        impl RadixInt for $t {
            const BYTES: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;
            const MIN: Self = <$t>::MIN;

            #[inline]
            fn is_negative(self) -> bool {
                self < Self::default()
            }

            #[inline]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }
        }

        impl Digits for $t {
            const ROUNDS: usize = rounds_for(<$t as RadixInt>::BYTES);

            #[inline]
            fn digit(&self, round: usize) -> usize {
                RadixKey::digit(*self as $bits, round)
            }
        }
    )*};
}

impl_radix_int! {
    u8 => u8, false;
    u16 => u16, false;
    u32 => u32, false;
    u64 => u64, false;
    u128 => u128, false;
    usize => usize, false;
    i8 => u8, true;
    i16 => u16, true;
    i32 => u32, true;
    i64 => u64, true;
    i128 => u128, true;
    isize => usize, true;
}
