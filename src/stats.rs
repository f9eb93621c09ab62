//! Provides a snapshot of the internal state of a table.

use std::fmt::{self, Debug};

/// Statistics about the slot array of a [`ProbingTable`][probing-table].
///
/// The counters are updated according to the following rules:
///
/// - `size` is the number of occupied slots; `tombstones` is the number of
///   slots whose record has been removed but which a probe must still walk past.
/// - When an `update` pushes `size` over `growth_threshold`, the table grows:
///   `capacity` and `growth_threshold` double, `tombstones` drops to zero and
///   `grow_count` is incremented.
/// - When the tombstone ratio reaches the configured compaction ratio (or
///   `compact` is called), the slot array is rebuilt at the same capacity:
///   `tombstones` drops to zero and `compaction_count` is incremented.
/// - `clear` resets `size` and `tombstones` but not the counters.
///
/// [probing-table]: ../unsync/struct.ProbingTable.html
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TableStats {
    size: usize,
    capacity: usize,
    tombstones: usize,
    growth_threshold: usize,
    grow_count: u64,
    compaction_count: u64,
}

impl Debug for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStats")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("load_factor", &self.load_factor())
            .field("tombstones", &self.tombstones)
            .field("tombstone_ratio", &self.tombstone_ratio())
            .field("growth_threshold", &self.growth_threshold)
            .field("grow_count", &self.grow_count)
            .field("compaction_count", &self.compaction_count)
            .finish()
    }
}

impl TableStats {
    pub(crate) fn new(
        size: usize,
        capacity: usize,
        tombstones: usize,
        growth_threshold: usize,
    ) -> Self {
        Self {
            size,
            capacity,
            tombstones,
            growth_threshold,
            ..Default::default()
        }
    }

    pub(crate) fn set_counts(&mut self, grow_count: u64, compaction_count: u64) -> &mut Self {
        self.grow_count = grow_count;
        self.compaction_count = compaction_count;
        self
    }

    /// Returns the number of records in the table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of tombstones (removed records) still in the table.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns the `size` at or below which the table does not grow.
    pub fn growth_threshold(&self) -> usize {
        self.growth_threshold
    }

    /// Returns the number of times the table has doubled its capacity.
    pub fn grow_count(&self) -> u64 {
        self.grow_count
    }

    /// Returns the number of times the table has purged its tombstones
    /// without growing.
    pub fn compaction_count(&self) -> u64 {
        self.compaction_count
    }

    /// Returns the ratio of occupied slots to all slots.
    pub fn load_factor(&self) -> f64 {
        ratio(self.size, self.capacity)
    }

    /// Returns the ratio of tombstones to all slots.
    pub fn tombstone_ratio(&self) -> f64 {
        ratio(self.tombstones, self.capacity)
    }

    /// Returns the ratio of slots a failed lookup may have to walk past,
    /// occupied or deleted, to all slots.
    pub fn used_ratio(&self) -> f64 {
        ratio(self.size + self.tombstones, self.capacity)
    }
}

fn ratio(n: usize, d: usize) -> f64 {
    if d == 0 {
        0.0
    } else {
        n as f64 / d as f64
    }
}
