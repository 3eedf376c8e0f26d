//! Indexed binary min-heap
//!
//! A binary min-heap stored in a `Vec`, paired with a hash map from each
//! element to its current slot in that `Vec`. The map is what makes
//! `change_priority`, `get_priority`, `contains` and `remove` possible without
//! scanning the heap.
//!
//! Slots use 0-based positional arithmetic: the children of `k` are `2k + 1`
//! and `2k + 2`, its parent is `(k - 1) / 2`.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity         |
//! |-------------------|--------------------|
//! | `add`             | O(log n) amortized |
//! | `peek_min`        | O(1)               |
//! | `remove_min`      | O(log n)           |
//! | `change_priority` | O(log n)           |
//! | `remove`          | O(log n)           |
//! | `contains`        | O(1) expected      |
//! | `get_priority`    | O(1) expected      |
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::{IndexedMinPQ, MinPQ};
//!
//! let mut pq = IndexedMinPQ::new();
//! pq.add("x", 3.0).unwrap();
//! pq.add("y", 1.0).unwrap();
//! pq.change_priority(&"x", 0.5).unwrap();
//!
//! assert_eq!(pq.peek_min_entry(), Ok((&"x", 0.5)));
//! assert_eq!(pq.into_sorted_vec(), vec![("x", 0.5), ("y", 1.0)]);
//! ```

use crate::traits::{check_priority, MinPQ, MinPQError};
use rustc_hash::FxHashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Entry<E> {
    element: E,
    priority: f64,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Binary min-heap with an element-to-slot index
///
/// Every slot swap goes through [`IndexedMinPQ::swap`], which rewrites both
/// moved elements in the index, so the index never points at a stale slot
/// once a public method returns.
#[derive(Debug, Clone)]
pub struct IndexedMinPQ<E> {
    /// Heap-ordered (element, priority) pairs
    entries: Vec<Entry<E>>,
    /// Slot of every element in `entries`
    positions: FxHashMap<E, usize>,
}

impl<E: Eq + Hash + Clone> MinPQ<E> for IndexedMinPQ<E> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, element: E, priority: f64) -> Result<(), MinPQError> {
        check_priority(priority)?;
        if self.positions.contains_key(&element) {
            return Err(MinPQError::DuplicateElement);
        }

        let index = self.entries.len();
        self.positions.insert(element.clone(), index);
        self.entries.push(Entry { element, priority });
        self.sift_up(index);
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.positions.contains_key(element)
    }

    fn get_priority(&self, element: &E) -> Result<f64, MinPQError> {
        let index = self.position_of(element)?;
        Ok(self.entries[index].priority)
    }

    fn peek_min(&self) -> Result<&E, MinPQError> {
        self.peek_min_entry().map(|(element, _)| element)
    }

    fn remove_min(&mut self) -> Result<E, MinPQError> {
        self.remove_min_entry().map(|(element, _)| element)
    }

    fn change_priority(&mut self, element: &E, priority: f64) -> Result<(), MinPQError> {
        check_priority(priority)?;
        let index = self.position_of(element)?;

        let old_priority = std::mem::replace(&mut self.entries[index].priority, priority);
        if priority < old_priority {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    fn remove(&mut self, element: &E) -> Result<f64, MinPQError> {
        let index = self.position_of(element)?;
        Ok(self.remove_at(index).priority)
    }
}

impl<E: Eq + Hash + Clone> IndexedMinPQ<E> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Builds a queue from (element, priority) pairs
    ///
    /// Fails on the first NaN priority or repeated element.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, MinPQError>
    where
        I: IntoIterator<Item = (E, f64)>,
    {
        let iter = iter.into_iter();
        let mut pq = Self::with_capacity(iter.size_hint().0);
        for (element, priority) in iter {
            pq.add(element, priority)?;
        }
        Ok(pq)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Iterates over (element, priority) pairs in heap order, not sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&E, f64)> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.element, entry.priority))
    }

    /// Returns the minimum element together with its priority
    pub fn peek_min_entry(&self) -> Result<(&E, f64), MinPQError> {
        self.entries
            .first()
            .map(|entry| (&entry.element, entry.priority))
            .ok_or(MinPQError::EmptyQueue)
    }

    /// Removes the minimum element and returns it with its priority
    pub fn remove_min_entry(&mut self) -> Result<(E, f64), MinPQError> {
        if self.entries.is_empty() {
            return Err(MinPQError::EmptyQueue);
        }
        let entry = self.remove_at(0);
        Ok((entry.element, entry.priority))
    }

    /// Drains the queue into ascending priority order
    pub fn into_sorted_vec(mut self) -> Vec<(E, f64)> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Ok(entry) = self.remove_min_entry() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks heap order, density and index consistency
    ///
    /// Returns false if any parent outranks its child, if the index and the
    /// heap disagree on an element's slot, or if the index holds an element
    /// the heap does not. Runs in O(n).
    pub fn check_invariants(&self) -> bool {
        if self.positions.len() != self.entries.len() {
            return false;
        }

        let heap_ordered = (1..self.entries.len())
            .all(|k| self.entries[parent(k)].priority <= self.entries[k].priority);
        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(k, entry)| self.positions.get(&entry.element) == Some(&k));

        heap_ordered && indexed
    }

    fn position_of(&self, element: &E) -> Result<usize, MinPQError> {
        self.positions
            .get(element)
            .copied()
            .ok_or(MinPQError::NoSuchElement)
    }

    /// Point the index entry of the element in `index` back at `index`
    fn record_position(&mut self, index: usize) {
        if let Some(slot) = self.positions.get_mut(&self.entries[index].element) {
            *slot = index;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.record_position(i);
        self.record_position(j);
    }

    /// Take the entry at `index` out of the heap, filling the hole with the last entry
    fn remove_at(&mut self, index: usize) -> Entry<E> {
        let entry = self.entries.swap_remove(index);
        self.positions.remove(&entry.element);

        if index < self.entries.len() {
            self.record_position(index);
            // The moved entry came from the bottom of a possibly different
            // subtree, so it may need to travel in either direction.
            let index = self.sift_down(index);
            self.sift_up(index);
        }
        entry
    }

    /// Move the entry at `index` up to maintain heap order, returning its new slot
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = parent(index);
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move the entry at `index` down to maintain heap order, returning its new slot
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = left_child(index);
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                return index;
            }
        }
    }
}

impl<E: Eq + Hash + Clone> Default for IndexedMinPQ<E> {
    fn default() -> Self {
        <Self as MinPQ<E>>::new()
    }
}
