//! Naive reference queue
//!
//! Stores a plain map from element to priority and finds the minimum by
//! scanning every entry. It shares no code with
//! [`IndexedMinPQ`](crate::heap::IndexedMinPQ); the two only meet at the
//! [`MinPQ`] trait, which makes this variant a reference to check the heap
//! against.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity    |
//! |-------------------|---------------|
//! | `add`             | O(1) expected |
//! | `peek_min`        | O(n)          |
//! | `remove_min`      | O(n)          |
//! | `change_priority` | O(1) expected |

use crate::traits::{check_priority, MinPQ, MinPQError};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Min-priority queue backed by an unordered map
#[derive(Debug, Clone)]
pub struct NaiveMinPQ<E> {
    priorities: FxHashMap<E, f64>,
}

impl<E: Eq + Hash + Clone> NaiveMinPQ<E> {
    fn min_entry(&self) -> Option<(&E, f64)> {
        self.priorities
            .iter()
            .map(|(element, &priority)| (element, priority))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl<E: Eq + Hash + Clone> MinPQ<E> for NaiveMinPQ<E> {
    fn new() -> Self {
        Self {
            priorities: FxHashMap::default(),
        }
    }

    fn len(&self) -> usize {
        self.priorities.len()
    }

    fn add(&mut self, element: E, priority: f64) -> Result<(), MinPQError> {
        check_priority(priority)?;
        if self.priorities.contains_key(&element) {
            return Err(MinPQError::DuplicateElement);
        }
        self.priorities.insert(element, priority);
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.priorities.contains_key(element)
    }

    fn get_priority(&self, element: &E) -> Result<f64, MinPQError> {
        self.priorities
            .get(element)
            .copied()
            .ok_or(MinPQError::NoSuchElement)
    }

    fn peek_min(&self) -> Result<&E, MinPQError> {
        self.min_entry()
            .map(|(element, _)| element)
            .ok_or(MinPQError::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<E, MinPQError> {
        let min = self.peek_min()?.clone();
        self.priorities.remove(&min);
        Ok(min)
    }

    fn change_priority(&mut self, element: &E, priority: f64) -> Result<(), MinPQError> {
        check_priority(priority)?;
        let slot = self
            .priorities
            .get_mut(element)
            .ok_or(MinPQError::NoSuchElement)?;
        *slot = priority;
        Ok(())
    }

    fn remove(&mut self, element: &E) -> Result<f64, MinPQError> {
        self.priorities
            .remove(element)
            .ok_or(MinPQError::NoSuchElement)
    }
}

impl<E: Eq + Hash + Clone> Default for NaiveMinPQ<E> {
    fn default() -> Self {
        <Self as MinPQ<E>>::new()
    }
}
