//! Linear-scan reference queue, used only to cross-check the heap in tests.

/// Slow but obviously correct: every operation scans the whole list.
pub(crate) struct NaivePriorityQueue<V, P> {
    entries: Vec<(V, P)>,
    better_than: fn(P, P) -> bool,
}

impl<V: PartialEq, P: Copy> NaivePriorityQueue<V, P> {
    pub(crate) fn new(better_than: fn(P, P) -> bool) -> Self {
        Self { entries: Vec::new(), better_than }
    }

    pub(crate) fn insert(&mut self, value: V, priority: P) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|(v, _)| *v == value) {
            entry.1 = priority;
            return false;
        }
        self.entries.push((value, priority));
        true
    }

    fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &(_, priority)) in self.entries.iter().enumerate() {
            match best {
                Some(b) if !(self.better_than)(priority, self.entries[b].1) => {}
                _ => best = Some(i),
            }
        }
        best
    }

    pub(crate) fn best_priority(&self) -> Option<P> {
        self.best_index().map(|i| self.entries[i].1)
    }

    pub(crate) fn next(&mut self) -> (V, P) {
        match self.best_index() {
            Some(i) => self.entries.remove(i),
            None => panic!("empty list"),
        }
    }

    pub(crate) fn remove(&mut self, value: &V) -> Option<P> {
        let i = self.entries.iter().position(|(v, _)| v == value)?;
        Some(self.entries.remove(i).1)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority_queue::less_than;

    #[test]
    fn test_naive_queue_orders_and_updates() {
        let mut queue = NaivePriorityQueue::new(less_than);
        assert!(queue.insert('a', 3));
        assert!(queue.insert('b', 2));
        assert!(!queue.insert('a', 1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.best_priority(), Some(1));
        assert_eq!(queue.next(), ('a', 1));
        assert_eq!(queue.remove(&'b'), Some(2));
        assert!(queue.is_empty());
    }
}
