//! Updatable binary-heap priority queue.
//!
//! Each value appears at most once. Inserting a value that is already queued
//! changes its priority in place instead of adding a duplicate, which is the
//! decrease-key operation A* needs when it finds a cheaper path to a node
//! that is still on the frontier.
//!
//! Ordering is decided by a `better_than(a, b)` function: the entry whose
//! priority is better than every other is returned first. Use [`less_than`]
//! for a min-queue and [`greater_than`] for a max-queue.

mod position_map;

#[cfg(test)]
pub(crate) mod naive;

use std::fmt;
use std::hash::Hash;

use position_map::PositionMap;

/// Returns lower priorities first
pub fn less_than<P: Ord>(a: P, b: P) -> bool {
    a < b
}

/// Returns higher priorities first
pub fn greater_than<P: Ord>(a: P, b: P) -> bool {
    a > b
}

#[derive(Debug, Clone)]
struct HeapEntry<V, P> {
    value: V,
    priority: P,
}

/// Binary heap with a value -> slot index for O(log n) priority updates.
pub struct PriorityQueue<V, P> {
    heap: Vec<HeapEntry<V, P>>,
    positions: PositionMap<V>,
    better_than: fn(P, P) -> bool,
}

impl<V, P> PriorityQueue<V, P>
where
    V: Eq + Hash + Clone,
    P: Copy,
{
    /// Create an empty queue. `better_than(a, b)` must return true iff
    /// priority `a` should be dequeued before priority `b`.
    pub fn new(better_than: fn(P, P) -> bool) -> Self {
        Self::with_capacity(better_than, 0)
    }

    pub fn with_capacity(better_than: fn(P, P) -> bool, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: PositionMap::with_capacity(capacity),
            better_than,
        }
    }

    /// Add `value`, or update its priority if it is already queued.
    /// Returns true if the value was newly added.
    pub fn insert(&mut self, value: V, priority: P) -> bool {
        if let Some(slot) = self.positions.get(&value) {
            self.heap[slot].priority = priority;
            self.fix(slot);
            return false;
        }

        let slot = self.heap.len();
        self.positions.track(value.clone(), slot);
        self.heap.push(HeapEntry { value, priority });
        self.sift_up(slot);
        true
    }

    /// Remove and return the best entry.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Check [`is_empty`](Self::is_empty)
    /// first, or use [`pop`](Self::pop).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> (V, P) {
        match self.pop() {
            Some(entry) => entry,
            None => panic!("next() called on an empty priority queue"),
        }
    }

    /// Remove and return the best entry, or None if the queue is empty
    pub fn pop(&mut self) -> Option<(V, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);

        let HeapEntry { value, priority } = self.heap.pop()?;
        self.positions.forget(&value);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((value, priority))
    }

    /// The best entry, without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.first().map(|entry| (&entry.value, entry.priority))
    }

    /// Current priority of `value`, if it is queued
    pub fn priority(&self, value: &V) -> Option<P> {
        self.positions.get(value).map(|slot| self.heap[slot].priority)
    }

    pub fn contains(&self, value: &V) -> bool {
        self.positions.get(value).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.heap.len(), self.positions.len());
        self.heap.len()
    }

    fn better(&self, a: usize, b: usize) -> bool {
        (self.better_than)(self.heap[a].priority, self.heap[b].priority)
    }

    /// Restore heap order around a slot whose priority changed
    fn fix(&mut self, slot: usize) {
        if !self.sift_up(slot) {
            self.sift_down(slot);
        }
    }

    /// Move the entry at `slot` towards the root while it beats its parent.
    /// Returns true if it moved.
    fn sift_up(&mut self, mut slot: usize) -> bool {
        let start = slot;
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.better(slot, parent) {
                break;
            }
            self.swap_entries(slot, parent);
            slot = parent;
        }
        slot != start
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;

            if left < len && self.better(left, best) {
                best = left;
            }
            if right < len && self.better(right, best) {
                best = right;
            }
            if best == slot {
                break;
            }

            self.swap_entries(slot, best);
            slot = best;
        }
    }

    /// Swap two heap slots and keep the position map in step
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.relocate(&self.heap[a].value, a);
        self.positions.relocate(&self.heap[b].value, b);
    }
}

impl<V, P> PriorityQueue<V, P>
where
    V: Eq + Hash + Clone,
    P: Copy + Ord,
{
    /// Queue that returns the lowest priority first
    pub fn min_first() -> Self {
        Self::new(less_than)
    }

    /// Queue that returns the highest priority first
    pub fn max_first() -> Self {
        Self::new(greater_than)
    }
}

impl<V: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityQueue<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.heap.iter().map(|entry| (&entry.value, &entry.priority)))
            .finish()
    }
}
