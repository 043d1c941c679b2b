use std::collections::TryReserveError;

/// Failure of one of the sort entry points.
///
/// Every variant is reported before the input is touched, so a failed call
/// leaves the caller's data exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RadixError {
    /// The transient scratch buffer could not be allocated.
    #[error("failed to allocate scratch memory for {len} items")]
    Alloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// A caller-supplied scratch buffer is shorter than the input.
    #[error("scratch buffer holds {got} items but {needed} are required")]
    ScratchTooSmall { needed: usize, got: usize },

    /// The index output slice of an index-only sort is shorter than the input.
    #[error("index output holds {got} slots but {needed} are required")]
    OutputTooSmall { needed: usize, got: usize },
}
