use alloc::collections::TryReserveError;

use thiserror::Error;

/// Why [`ensure_capacity`](crate::StringBuilder::ensure_capacity) refused to
/// grow the buffer.
///
/// Either way the builder is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// No capacity of the form `16 * 2^k` representable in a `usize` is at
    /// least `requested`.
    #[error("capacity overflow: cannot grow to hold {requested} bytes")]
    Overflow {
        /// The minimum capacity that was asked for.
        requested: usize,
    },
    /// The allocator could not provide the storage.
    #[error("allocation of {requested} bytes failed: {source}")]
    AllocationFailed {
        /// The capacity the builder attempted to allocate.
        requested: usize,
        /// The allocator's report.
        source: TryReserveError,
    },
}
