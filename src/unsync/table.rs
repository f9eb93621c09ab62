use super::{
    probe::Probe,
    slot::{Record, Slot},
    ProbingTableBuilder,
};
use crate::{
    common::{self, hash::hash_key, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_LOAD_FACTOR},
    stats::TableStats,
    Table, TableError,
};

use std::{fmt, mem};

/// A hash table with `String` keys that is _not_ thread-safe.
///
/// `ProbingTable` stores its records directly in a single slot array and
/// resolves collisions by linear probing: a key lives in the first suitable
/// slot at or after its home slot, `hash(key) % capacity`, wrapping at the end
/// of the array.
///
/// Removing a record leaves a tombstone in its slot rather than emptying it,
/// so lookups for keys further along the same probe chain still find them.
/// Tombstones are reused by later insertions, and are dropped when the table
/// grows.
///
/// # Examples
///
/// ```rust
/// use lptable::unsync::ProbingTable;
///
/// const NUM_KEYS: usize = 64;
///
/// fn value(n: usize) -> String {
///     format!("value {}", n)
/// }
///
/// // Create a table with 16 slots that grows once it is 75% full.
/// let mut table = ProbingTable::new(16, 0.75);
///
/// // Insert 64 records.
/// for key in 0..NUM_KEYS {
///     table.update(key.to_string(), value(key));
/// }
///
/// // Remove every 4th record.
/// for key in (0..NUM_KEYS).step_by(4) {
///     assert!(table.remove(&key.to_string()));
/// }
///
/// // Verify the result.
/// for key in 0..NUM_KEYS {
///     if key % 4 == 0 {
///         assert_eq!(table.find(&key.to_string()), None);
///     } else {
///         assert_eq!(table.find(&key.to_string()), Some(&value(key)));
///     }
/// }
/// assert_eq!(table.size(), NUM_KEYS - NUM_KEYS / 4);
/// ```
///
/// # Growth
///
/// The table doubles its capacity whenever an insertion would push the number
/// of records over the growth threshold, `floor(initial_capacity *
/// max_load_factor)`. The threshold doubles together with the capacity. Growth
/// happens synchronously inside [`update`](#method.update), so an occasional
/// `update` costs `O(size)`.
///
/// The initial threshold is clamped to `1..=initial_capacity`. A
/// configuration whose product rounds down to zero still holds one record
/// before it grows, rather than growing on every insertion:
///
/// ```rust
/// use lptable::unsync::ProbingTable;
///
/// let mut table = ProbingTable::new(3, 0.1);
/// assert_eq!(table.growth_threshold(), 1);
///
/// table.update("a", 1);
/// assert_eq!(table.capacity(), 3);
/// table.update("b", 2);
/// assert_eq!(table.capacity(), 6);
/// assert_eq!(table.growth_threshold(), 2);
/// ```
///
/// The table never shrinks. By default, tombstones are purged only by a grow.
/// A workload that removes much more than it inserts can be kept in check by
/// [`compact`](#method.compact) or by enabling automatic compaction with
/// [`ProbingTableBuilder::tombstone_compaction`][compaction].
///
/// [compaction]: ./struct.ProbingTableBuilder.html#method.tombstone_compaction
///
/// # Hashing Algorithm
///
/// Every table uses the same fixed string hash, SipHash 1-3 with zero keys, as
/// provided by `std::collections::hash_map::DefaultHasher`. The hash is not
/// seeded per instance and can't be replaced.
#[derive(Clone)]
pub struct ProbingTable<V> {
    slots: Vec<Slot<V>>,
    size: usize,
    tombstones: usize,
    growth_threshold: usize,
    max_load_factor: f64,
    tombstone_compaction: Option<f64>,
    grow_count: u64,
    compaction_count: u64,
}

impl<V> fmt::Debug for ProbingTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbingTable")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("tombstones", &self.tombstones)
            .field("growth_threshold", &self.growth_threshold)
            .finish()
    }
}

impl<V> Default for ProbingTable<V> {
    /// Creates an empty table with 16 slots and a max load factor of `0.75`.
    fn default() -> Self {
        Self::with_everything(
            alloc_slots(DEFAULT_INITIAL_CAPACITY),
            DEFAULT_MAX_LOAD_FACTOR,
            None,
        )
    }
}

impl<V> ProbingTable<V> {
    /// Constructs a new `ProbingTable<V>` with `initial_capacity` slots, which
    /// grows once more than `initial_capacity * max_load_factor` records are
    /// stored.
    ///
    /// To enable tombstone compaction, use the
    /// [`ProbingTableBuilder`][builder-struct].
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is zero or `max_load_factor` is not within
    /// `(0.0, 1.0]`.
    ///
    /// [builder-struct]: ./struct.ProbingTableBuilder.html
    pub fn new(initial_capacity: usize, max_load_factor: f64) -> Self {
        Self::builder()
            .initial_capacity(initial_capacity)
            .max_load_factor(max_load_factor)
            .build()
    }

    /// Same as [`new`](#method.new), but returns an error instead of panicking
    /// on an invalid configuration or when the slot array can't be allocated.
    pub fn try_new(initial_capacity: usize, max_load_factor: f64) -> Result<Self, TableError> {
        Self::builder()
            .initial_capacity(initial_capacity)
            .max_load_factor(max_load_factor)
            .try_build()
    }

    /// Returns a [`ProbingTableBuilder`][builder-struct], which can build a
    /// `ProbingTable` with various configuration knobs.
    ///
    /// [builder-struct]: ./struct.ProbingTableBuilder.html
    pub fn builder() -> ProbingTableBuilder<V> {
        ProbingTableBuilder::default()
    }

    pub(crate) fn with_everything(
        slots: Vec<Slot<V>>,
        max_load_factor: f64,
        tombstone_compaction: Option<f64>,
    ) -> Self {
        let capacity = slots.len();
        let growth_threshold = common::growth_threshold(capacity, max_load_factor);

        #[cfg(feature = "logging")]
        log::trace!(
            "Created a probing table. capacity: {capacity}, growth_threshold: {growth_threshold}"
        );

        Self {
            slots,
            size: 0,
            tombstones: 0,
            growth_threshold,
            max_load_factor,
            tombstone_compaction,
            grow_count: 0,
            compaction_count: 0,
        }
    }
}

//
// public
//
impl<V> ProbingTable<V> {
    /// Returns a reference to the value corresponding to the key.
    pub fn find(&self, key: &str) -> Option<&V> {
        self.search(key)
            .and_then(|index| self.slots[index].record())
            .map(|record| &record.value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.search(key)?;
        self.slots[index].record_mut().map(|record| &mut record.value)
    }

    /// Returns `true` if the table contains a value for the key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the table has this key present, the value is replaced in place.
    /// Otherwise a new record is added, and the table grows if the record
    /// pushes its size over the growth threshold.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`. Aborts if the grown
    /// slot array can't be allocated. Use [`try_update`](#method.try_update)
    /// to handle both as an error.
    pub fn update<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str> + Into<String>,
    {
        if let Err(e) = self.upsert(key, value, |capacity| Ok(alloc_slots(capacity))) {
            panic!("{e}");
        }
    }

    /// Same as [`update`](#method.update), but allocates the grown slot array
    /// fallibly.
    ///
    /// On error the table is left unchanged and the key-value pair is dropped.
    pub fn try_update<K>(&mut self, key: K, value: V) -> Result<(), TableError>
    where
        K: AsRef<str> + Into<String>,
    {
        self.upsert(key, value, try_alloc_slots)
    }

    /// Removes the record for the key, and returns `true` if there was one.
    ///
    /// The slot becomes a tombstone. If tombstone compaction is enabled and the
    /// tombstones now make up at least the configured share of the slots, the
    /// slot array is rebuilt at its current capacity.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(index) = self.search(key) else {
            return false;
        };

        // Drops the key and the value.
        let removed = self.slots[index].take_record();
        debug_assert!(removed.is_some());
        self.size -= 1;
        self.tombstones += 1;

        self.compact_if_needed();
        true
    }

    /// Removes all records, resetting every slot to empty.
    ///
    /// The capacity and the growth threshold are kept.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.size = 0;
        self.tombstones = 0;
    }

    /// Rebuilds the slot array at its current capacity, dropping every
    /// tombstone. Does nothing if there are none.
    pub fn compact(&mut self) {
        if self.tombstones == 0 {
            return;
        }

        #[cfg(feature = "logging")]
        let dropped = self.tombstones;

        let slots = alloc_slots(self.capacity());
        self.rehash_into(slots);
        self.compaction_count += 1;

        #[cfg(feature = "logging")]
        log::debug!(
            "Compacted a probing table. capacity: {}, size: {}, tombstones dropped: {dropped}",
            self.capacity(),
            self.size
        );
    }

    /// Returns the number of records in the table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the size at or below which the table does not grow.
    pub fn growth_threshold(&self) -> usize {
        self.growth_threshold
    }

    /// Returns the `max_load_factor` of this table.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns the tombstone compaction ratio of this table, if enabled.
    pub fn tombstone_compaction(&self) -> Option<f64> {
        self.tombstone_compaction
    }

    /// Returns the number of tombstones in the table.
    pub fn tombstone_count(&self) -> usize {
        self.tombstones
    }

    /// Returns a snapshot of the table's statistics.
    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats::new(
            self.size,
            self.capacity(),
            self.tombstones,
            self.growth_threshold,
        );
        stats.set_counts(self.grow_count, self.compaction_count);
        stats
    }
}

impl<V> Table<V> for ProbingTable<V> {
    fn update<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str> + Into<String>,
    {
        ProbingTable::update(self, key, value)
    }

    fn remove(&mut self, key: &str) -> bool {
        ProbingTable::remove(self, key)
    }

    fn find(&self, key: &str) -> Option<&V> {
        ProbingTable::find(self, key)
    }

    fn size(&self) -> usize {
        ProbingTable::size(self)
    }

    fn is_empty(&self) -> bool {
        ProbingTable::is_empty(self)
    }
}

//
// private
//
impl<V> ProbingTable<V> {
    #[inline]
    fn search(&self, key: &str) -> Option<usize> {
        self.search_with_hash(hash_key(key), key)
    }

    // Walks the probe chain until an `Empty` slot. Tombstones don't end the
    // walk, or keys inserted past them would become unreachable.
    fn search_with_hash(&self, hash: u64, key: &str) -> Option<usize> {
        for index in Probe::new(hash, self.capacity()) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(record) if record.key == key => return Some(index),
                _ => continue,
            }
        }
        // Every slot is either occupied or deleted.
        None
    }

    fn upsert<K, F>(&mut self, key: K, value: V, alloc: F) -> Result<(), TableError>
    where
        K: AsRef<str> + Into<String>,
        F: FnOnce(usize) -> Result<Vec<Slot<V>>, TableError>,
    {
        let hash = hash_key(key.as_ref());

        if let Some(index) = self.search_with_hash(hash, key.as_ref()) {
            if let Some(record) = self.slots[index].record_mut() {
                record.value = value;
            }
            return Ok(());
        }

        // Grow before placing the record that would cross the threshold, so
        // a failed allocation leaves the table untouched. Because the threshold
        // never exceeds the capacity, this also covers a completely full table.
        if self.size >= self.growth_threshold {
            let slots = alloc(doubled(self.capacity())?)?;
            self.grow_into(slots);
        }

        let record = Record {
            key: key.into(),
            value,
        };
        if insert_at(&mut self.slots, hash, record) {
            self.tombstones -= 1;
        }
        self.size += 1;
        Ok(())
    }

    fn grow_into(&mut self, slots: Vec<Slot<V>>) {
        debug_assert_eq!(slots.len(), self.capacity() * 2);

        #[cfg(feature = "logging")]
        let (old_capacity, dropped) = (self.capacity(), self.tombstones);

        self.rehash_into(slots);
        self.growth_threshold = self.growth_threshold.saturating_mul(2);
        self.grow_count += 1;

        #[cfg(feature = "logging")]
        log::debug!(
            "Grew a probing table. capacity: {old_capacity} -> {}, growth_threshold: {}, \
            records moved: {}, tombstones dropped: {dropped}",
            self.capacity(),
            self.growth_threshold,
            self.size
        );
    }

    // Moves every record into `slots` with a freshly computed hash. Tombstones
    // are not carried over.
    fn rehash_into(&mut self, slots: Vec<Slot<V>>) {
        debug_assert!(slots.iter().all(Slot::is_empty));
        debug_assert!(slots.len() > self.size);

        let old_slots = mem::replace(&mut self.slots, slots);
        for slot in old_slots {
            if let Slot::Occupied(record) = slot {
                let hash = hash_key(&record.key);
                insert_at(&mut self.slots, hash, record);
            }
        }
        self.tombstones = 0;
    }

    fn compact_if_needed(&mut self) {
        if let Some(ratio) = self.tombstone_compaction {
            if self.tombstones as f64 >= ratio * self.capacity() as f64 {
                self.compact();
            }
        }
    }
}

//
// for testing
//
#[cfg(test)]
impl<V> ProbingTable<V> {
    pub(crate) fn slot_index(&self, key: &str) -> Option<usize> {
        self.search(key)
    }

    pub(crate) fn is_tombstone_at(&self, index: usize) -> bool {
        matches!(self.slots[index], Slot::Deleted)
    }
}

//
// private free-standing functions
//

/// Places the record in the first slot of its probe chain that is not
/// occupied, and returns `true` if that slot was a tombstone.
///
/// Does not look for an existing record with the same key; the caller must
/// have checked that the key is absent.
fn insert_at<V>(slots: &mut [Slot<V>], hash: u64, record: Record<V>) -> bool {
    let index = Probe::new(hash, slots.len())
        .find(|&i| !slots[i].is_occupied())
        .expect("Cannot find a free slot in the slot array");
    let reused_tombstone = matches!(slots[index], Slot::Deleted);
    slots[index] = Slot::Occupied(record);
    reused_tombstone
}

fn doubled(capacity: usize) -> Result<usize, TableError> {
    capacity.checked_mul(2).ok_or(TableError::CapacityOverflow)
}

pub(crate) fn alloc_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Slot::default);
    slots
}

pub(crate) fn try_alloc_slots<V>(capacity: usize) -> Result<Vec<Slot<V>>, TableError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, Slot::default);
    Ok(slots)
}
