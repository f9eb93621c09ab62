#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! `lptable` provides a hash table with `String` keys, built on open addressing
//! with linear probing and tombstone-based deletion.
//!
//! # Features
//!
//! - [`unsync::ProbingTable`] stores its records directly in a single slot
//!   array, with no per-record allocation besides the key itself.
//! - The table doubles its capacity whenever an insertion pushes its size over
//!   the growth threshold, `initial_capacity * max_load_factor`.
//! - Removal leaves a tombstone so that probe chains stay intact. Tombstones
//!   are reused by later insertions and purged on growth, or by compaction.
//! - Fallible counterparts ([`try_new`][try-new], [`try_update`][try-update])
//!   report allocation failure as a [`TableError`] instead of aborting.
//!
//! [try-new]: ./unsync/struct.ProbingTable.html#method.try_new
//! [try-update]: ./unsync/struct.ProbingTable.html#method.try_update
//!
//! # Example
//!
//! ```rust
//! use lptable::unsync::ProbingTable;
//!
//! let mut table = ProbingTable::new(4, 0.75);
//!
//! table.update("a", 1);
//! table.update("b", 2);
//! table.update("c", 3);
//! assert_eq!(table.capacity(), 4);
//!
//! // The fourth record pushes the size over the threshold of 3.
//! table.update("d", 4);
//! assert_eq!(table.capacity(), 8);
//! assert_eq!(table.growth_threshold(), 6);
//!
//! assert!(table.remove("b"));
//! assert_eq!(table.find("b"), None);
//! assert_eq!(table.find("d"), Some(&4));
//! assert_eq!(table.size(), 3);
//! ```
//!
//! # Logging
//!
//! Enable the `logging` feature to have tables emit [`log`][log-crate] records
//! when they grow or compact their slot arrays.
//!
//! [log-crate]: https://crates.io/crates/log
//!
//! # Thread Safety
//!
//! A table is not synchronized. It is `Send` and `Sync` when its value type is,
//! so it can be shared across threads behind a lock such as
//! `std::sync::Mutex`.

pub(crate) mod common;
pub mod stats;
mod table;
pub mod unsync;

pub use common::error::TableError;
pub use table::Table;
