use std::collections::TryReserveError;

/// The error type for constructing and growing a
/// [`ProbingTable`][probing-table].
///
/// [probing-table]: ./unsync/struct.ProbingTable.html
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// The initial capacity was zero. A table needs at least one slot.
    #[error("initial_capacity must be greater than zero")]
    InvalidCapacity,

    /// The max load factor was not within `(0.0, 1.0]`.
    #[error("max_load_factor must be in (0.0, 1.0], but got {0}")]
    InvalidLoadFactor(f64),

    /// The tombstone compaction ratio was not within `(0.0, 1.0]`.
    #[error("tombstone_compaction ratio must be in (0.0, 1.0], but got {0}")]
    InvalidCompactionRatio(f64),

    /// Doubling the capacity would overflow `usize`.
    #[error("capacity overflow while growing the table")]
    CapacityOverflow,

    /// The allocator could not provide memory for the slot array.
    #[error("failed to allocate the slot array: {0}")]
    AllocationFailed(#[from] TryReserveError),
}
