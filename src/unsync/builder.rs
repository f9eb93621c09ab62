use super::{
    table::{alloc_slots, try_alloc_slots},
    ProbingTable,
};
use crate::{
    common::{builder_utils, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_LOAD_FACTOR},
    TableError,
};

use std::marker::PhantomData;

/// Builds a [`ProbingTable`][table-struct] with various configuration knobs.
///
/// [table-struct]: ./struct.ProbingTable.html
///
/// # Examples
///
/// ```rust
/// use lptable::unsync::ProbingTable;
///
/// let mut table = ProbingTable::builder()
///     // Start with 1,024 slots.
///     .initial_capacity(1024)
///     // Grow once more than half of the slots are in use.
///     .max_load_factor(0.5)
///     // Purge tombstones once they take up a quarter of the slots.
///     .tombstone_compaction(0.25)
///     // Create the table.
///     .build();
///
/// table.update("zero", 0);
/// assert_eq!(table.find("zero"), Some(&0));
/// assert_eq!(table.growth_threshold(), 512);
/// ```
///
#[must_use]
pub struct ProbingTableBuilder<V> {
    initial_capacity: usize,
    max_load_factor: f64,
    tombstone_compaction: Option<f64>,
    value_type: PhantomData<V>,
}

impl<V> Default for ProbingTableBuilder<V> {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            tombstone_compaction: None,
            value_type: PhantomData,
        }
    }
}

impl<V> ProbingTableBuilder<V> {
    /// Construct a new `ProbingTableBuilder` that will be used to build a
    /// `ProbingTable` with `initial_capacity` slots.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Default::default()
        }
    }

    /// Builds a `ProbingTable<V>`.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is zero, or if `max_load_factor` or
    /// `tombstone_compaction` is not within `(0.0, 1.0]`.
    pub fn build(self) -> ProbingTable<V> {
        builder_utils::ensure_configurations_or_panic(
            self.initial_capacity,
            self.max_load_factor,
            self.tombstone_compaction,
        );
        ProbingTable::with_everything(
            alloc_slots(self.initial_capacity),
            self.max_load_factor,
            self.tombstone_compaction,
        )
    }

    /// Builds a `ProbingTable<V>`, or returns an error if the configuration is
    /// invalid or the slot array can't be allocated.
    pub fn try_build(self) -> Result<ProbingTable<V>, TableError> {
        builder_utils::validate_configurations(
            self.initial_capacity,
            self.max_load_factor,
            self.tombstone_compaction,
        )?;
        Ok(ProbingTable::with_everything(
            try_alloc_slots(self.initial_capacity)?,
            self.max_load_factor,
            self.tombstone_compaction,
        ))
    }

    /// Sets the initial number of slots of the table.
    pub fn initial_capacity(self, capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..self
        }
    }

    /// Sets the max load factor of the table.
    ///
    /// The table doubles its capacity once an insertion pushes the number of
    /// records over `floor(initial_capacity * max_load_factor)`.
    ///
    /// # Panics
    ///
    /// `ProbingTableBuilder::build` will panic if the given `load_factor` is not
    /// within `(0.0, 1.0]`.
    pub fn max_load_factor(self, load_factor: f64) -> Self {
        Self {
            max_load_factor: load_factor,
            ..self
        }
    }

    /// Enables tombstone compaction.
    ///
    /// After a `remove`, if the tombstones make up at least `ratio` of all
    /// slots, the table rebuilds its slot array at the same capacity, dropping
    /// every tombstone. Without this setting, tombstones are only dropped when
    /// the table grows.
    ///
    /// # Panics
    ///
    /// `ProbingTableBuilder::build` will panic if the given `ratio` is not
    /// within `(0.0, 1.0]`.
    pub fn tombstone_compaction(self, ratio: f64) -> Self {
        Self {
            tombstone_compaction: Some(ratio),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProbingTableBuilder;
    use crate::{unsync::ProbingTable, TableError};

    #[test]
    fn build_table() {
        // ProbingTable<&str>
        let mut table = ProbingTableBuilder::new(100).build();

        assert_eq!(table.capacity(), 100);
        assert_eq!(table.max_load_factor(), 0.75);
        assert_eq!(table.growth_threshold(), 75);
        assert_eq!(table.tombstone_compaction(), None);

        table.update("a", "Alice");
        assert_eq!(table.find("a"), Some(&"Alice"));

        let mut table = ProbingTableBuilder::new(100)
            .max_load_factor(0.5)
            .tombstone_compaction(0.3)
            .build();

        assert_eq!(table.capacity(), 100);
        assert_eq!(table.growth_threshold(), 50);
        assert_eq!(table.tombstone_compaction(), Some(0.3));

        table.update("a", "Alice");
        assert_eq!(table.find("a"), Some(&"Alice"));
    }

    #[test]
    fn build_table_with_defaults() {
        let table: ProbingTable<u8> = ProbingTable::builder().build();
        assert_eq!(table.capacity(), 16);
        assert_eq!(table.growth_threshold(), 12);
    }

    #[test]
    fn try_build_table() {
        let builder: ProbingTableBuilder<char> = ProbingTableBuilder::new(0);
        assert!(matches!(
            builder.try_build(),
            Err(TableError::InvalidCapacity)
        ));

        let builder: ProbingTableBuilder<char> = ProbingTableBuilder::new(8);
        assert!(matches!(
            builder.tombstone_compaction(0.0).try_build(),
            Err(TableError::InvalidCompactionRatio(_))
        ));

        let builder: ProbingTableBuilder<char> = ProbingTableBuilder::new(8);
        let table = builder.max_load_factor(1.0).try_build().expect("valid");
        assert_eq!(table.growth_threshold(), 8);
    }

    #[test]
    #[should_panic(expected = "initial_capacity must be greater than zero")]
    fn build_table_zero_capacity() {
        let builder: ProbingTableBuilder<String> = ProbingTableBuilder::new(0);
        builder.build();
    }

    #[test]
    #[should_panic(expected = "max_load_factor must be in (0.0, 1.0]")]
    fn build_table_too_high_load_factor() {
        let builder: ProbingTableBuilder<String> = ProbingTableBuilder::new(8);
        builder.max_load_factor(1.01).build();
    }

    #[test]
    #[should_panic(expected = "tombstone_compaction ratio must be in (0.0, 1.0]")]
    fn build_table_nan_compaction_ratio() {
        let builder: ProbingTableBuilder<String> = ProbingTableBuilder::new(8);
        builder.tombstone_compaction(f64::NAN).build();
    }
}
