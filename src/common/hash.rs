use std::{
    collections::hash_map::DefaultHasher,
    hash::{BuildHasher, BuildHasherDefault, Hash, Hasher},
};

/// The fixed hasher every table uses for its keys. Unlike `RandomState`, it is
/// not seeded per instance, so a key hashes to the same value in every table.
pub(crate) type KeyHashBuilder = BuildHasherDefault<DefaultHasher>;

#[inline]
pub(crate) fn hash_key(key: &str) -> u64 {
    let mut hasher = KeyHashBuilder::default().build_hasher();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Maps a hash to its home slot in a table of `capacity` slots.
#[inline]
pub(crate) fn home_slot(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (hash % capacity as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::{hash_key, home_slot};

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_key("alice"), hash_key("alice"));
        assert_eq!(hash_key(""), hash_key(&String::new()));
        assert_ne!(hash_key("alice"), hash_key("bob"));
    }

    #[test]
    fn home_slot_is_in_range() {
        for key in ["a", "b", "c", "alice", "bob", "cindy"] {
            let hash = hash_key(key);
            for capacity in [1, 2, 3, 7, 16, 1024] {
                assert!(home_slot(hash, capacity) < capacity);
            }
        }
        assert_eq!(home_slot(17, 8), 1);
        assert_eq!(home_slot(u64::MAX, 1), 0);
    }
}
