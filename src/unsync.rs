//! Provides a hash table that is _not_ thread-safe.

mod builder;
mod probe;
mod slot;
mod table;

pub use builder::ProbingTableBuilder;
pub use table::ProbingTable;
