pub(crate) mod builder_utils;
pub(crate) mod error;
pub(crate) mod hash;

/// The number of slots a table gets when no initial capacity is given.
pub(crate) const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// The load factor a table uses when no max load factor is given.
pub(crate) const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

// Ensures the value fits in a range of `1..=capacity`.
//
// A threshold of zero would make every insertion trigger a grow, and doubling
// zero never recovers from it.
pub(crate) fn growth_threshold(capacity: usize, max_load_factor: f64) -> usize {
    let threshold = (capacity as f64 * max_load_factor).floor() as usize;
    threshold.clamp(1, capacity)
}
