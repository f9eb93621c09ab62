/// The capability set of a string-keyed table.
///
/// [`ProbingTable`][probing-table] is the implementation in this crate. Code
/// that only needs these operations can be written against `Table<V>` instead
/// of the concrete type.
///
/// [probing-table]: ./unsync/struct.ProbingTable.html
///
/// # Examples
///
/// ```rust
/// use lptable::{unsync::ProbingTable, Table};
///
/// fn count_words<T: Table<u32>>(table: &mut T, text: &str) {
///     for word in text.split_whitespace() {
///         let n = table.find(word).copied().unwrap_or_default();
///         table.update(word, n + 1);
///     }
/// }
///
/// let mut table = ProbingTable::new(8, 0.75);
/// count_words(&mut table, "a rose is a rose is a rose");
///
/// assert_eq!(table.find("rose"), Some(&3));
/// assert_eq!(table.find("is"), Some(&2));
/// assert_eq!(Table::size(&table), 3);
/// ```
pub trait Table<V> {
    /// Inserts the value for the key, replacing any value already present.
    fn update<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str> + Into<String>;

    /// Removes the record for the key. Returns `true` if there was one.
    fn remove(&mut self, key: &str) -> bool;

    /// Returns a reference to the value for the key.
    fn find(&self, key: &str) -> Option<&V>;

    /// Returns the number of records.
    fn size(&self) -> usize;

    /// Returns `true` if there are no records.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
