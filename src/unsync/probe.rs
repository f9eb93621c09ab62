use crate::common::hash::home_slot;

/// The linear probe sequence for a hash: the home slot, then every following
/// slot, wrapping at the end of the array.
///
/// Yields each index at most once, so a walk over a table with no `Empty`
/// slot terminates after `capacity` steps.
pub(crate) struct Probe {
    offset: usize,
    capacity: usize,
    i: usize,
}

impl Probe {
    pub(crate) fn new(hash: u64, capacity: usize) -> Self {
        Self {
            offset: home_slot(hash, capacity),
            capacity,
            i: 0,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.capacity {
            return None;
        }
        // `offset < capacity` and `i < capacity`, so the sum can't overflow
        // unless `capacity` is above `usize::MAX / 2`, which no `Vec` allows.
        let index = (self.offset + self.i) % self.capacity;
        self.i += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Probe {}
