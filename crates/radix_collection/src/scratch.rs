use std::ops::{Deref, DerefMut};

use log::debug;

use crate::RadixError;

/// Working memory for one sort call.
///
/// Either a caller-owned slice, which is borrowed for the call and never
/// freed, or a transient allocation released when the value is dropped, on
/// every exit path. Both dereference to a slice of exactly the requested
/// length.
#[derive(Debug)]
pub enum Scratch<'a, E> {
    Borrowed(&'a mut [E]),
    Owned(Vec<E>),
}

impl<'a, E: Copy + Default> Scratch<'a, E> {
    /// Wraps `borrowed` when given, otherwise allocates `len` items.
    pub fn acquire(borrowed: Option<&'a mut [E]>, len: usize) -> Result<Self, RadixError> {
        match borrowed {
            Some(mem) => {
                let got = mem.len();
                if got < len {
                    return Err(RadixError::ScratchTooSmall { needed: len, got });
                }
                Ok(Self::Borrowed(&mut mem[..len]))
            }
            None => Self::allocate(len),
        }
    }

    pub fn allocate(len: usize) -> Result<Self, RadixError> {
        let bytes = len.saturating_mul(std::mem::size_of::<E>());
        let mut buf = Vec::new();
        if let Err(source) = buf.try_reserve_exact(len) {
            debug!("scratch allocation of {len} items failed: {source}");
            return Err(RadixError::Alloc { len, source });
        }
        buf.resize(len, E::default());
        debug!("allocated transient scratch: {len} items ({bytes} bytes)");
        Ok(Self::Owned(buf))
    }
}

#[cfg(test)]
impl<E> Scratch<'_, E> {
    fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }
}

impl<E> Deref for Scratch<'_, E> {
    type Target = [E];

    #[inline]
    fn deref(&self) -> &[E] {
        match self {
            Self::Borrowed(mem) => mem,
            Self::Owned(buf) => buf,
        }
    }
}

impl<E> DerefMut for Scratch<'_, E> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [E] {
        match self {
            Self::Borrowed(mem) => mem,
            Self::Owned(buf) => buf,
        }
    }
}
