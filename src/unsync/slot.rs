#[derive(Clone, Debug)]
pub(crate) struct Record<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// One position in the slot array.
///
/// `Deleted` is a tombstone: the slot once held a record, so a probe must keep
/// walking past it, but an insertion may reuse it.
#[derive(Clone, Debug)]
pub(crate) enum Slot<V> {
    Empty,
    Occupied(Record<V>),
    Deleted,
}

// Not derived, as the derive would require `V: Default`.
impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<V> Slot<V> {
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    #[inline]
    pub(crate) fn record(&self) -> Option<&Record<V>> {
        match self {
            Self::Occupied(record) => Some(record),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn record_mut(&mut self) -> Option<&mut Record<V>> {
        match self {
            Self::Occupied(record) => Some(record),
            _ => None,
        }
    }

    /// Turns an occupied slot into a tombstone and hands back its record.
    /// Leaves `Empty` and `Deleted` slots untouched.
    pub(crate) fn take_record(&mut self) -> Option<Record<V>> {
        if !self.is_occupied() {
            return None;
        }
        match std::mem::replace(self, Self::Deleted) {
            Self::Occupied(record) => Some(record),
            _ => unreachable!(),
        }
    }
}
