use std::hash::Hash;

use crate::collections::FxHashMap;

/// Tracks which heap slot each queued value lives in, so an existing value
/// can be found and re-sifted in O(1) + O(log n).
///
/// Every move the heap makes must be mirrored here; a stale slot means a
/// later update sifts the wrong entry.
#[derive(Debug)]
pub(super) struct PositionMap<V> {
    slots: FxHashMap<V, usize>,
}

impl<V: Eq + Hash> PositionMap<V> {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(super) fn get(&self, value: &V) -> Option<usize> {
        self.slots.get(value).copied()
    }

    /// Record a newly queued value. Returns false if it was already tracked.
    pub(super) fn track(&mut self, value: V, slot: usize) -> bool {
        self.slots.insert(value, slot).is_none()
    }

    /// Point an already tracked value at a new slot
    pub(super) fn relocate(&mut self, value: &V, slot: usize) {
        let previous = self.slots.get_mut(value).map(|s| std::mem::replace(s, slot));
        debug_assert!(previous.is_some(), "relocated a value that is not queued");
    }

    pub(super) fn forget(&mut self, value: &V) -> Option<usize> {
        self.slots.remove(value)
    }

    pub(super) fn len(&self) -> usize {
        self.slots.len()
    }
}
