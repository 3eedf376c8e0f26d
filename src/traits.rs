//! Common trait for indexed min-priority queues
//!
//! This module provides the [`MinPQ`] capability shared by every queue variant
//! in this crate:
//!
//! - [`IndexedMinPQ`](crate::heap::IndexedMinPQ): binary heap plus an
//!   element-to-position index, O(log n) updates
//! - [`NaiveMinPQ`](crate::naive::NaiveMinPQ): a plain element-to-priority map
//!   with linear scans, kept as a reference for differential testing
//!
//! Unlike `std::collections::BinaryHeap`, elements are addressed by identity:
//! each element may appear at most once and its priority can be changed in
//! place. Algorithms such as Dijkstra's shortest path depend on this.

use std::fmt;
use std::hash::Hash;

/// Error type for queue operations
///
/// Every variant is a usage error detected before the queue is mutated, so a
/// queue that returned an error is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinPQError {
    /// The priority is NaN and cannot be ordered
    InvalidArgument,
    /// `add` was called for an element that is already present
    DuplicateElement,
    /// The element is not present in the queue
    NoSuchElement,
    /// `peek_min` or `remove_min` was called on an empty queue
    EmptyQueue,
}

impl fmt::Display for MinPQError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinPQError::InvalidArgument => write!(f, "priority must not be NaN"),
            MinPQError::DuplicateElement => write!(f, "element is already in the queue"),
            MinPQError::NoSuchElement => write!(f, "element is not in the queue"),
            MinPQError::EmptyQueue => write!(f, "priority queue is empty"),
        }
    }
}

impl std::error::Error for MinPQError {}

/// Rejects priorities that break the total order the heap relies on.
pub(crate) fn check_priority(priority: f64) -> Result<(), MinPQError> {
    if priority.is_nan() {
        Err(MinPQError::InvalidArgument)
    } else {
        Ok(())
    }
}

/// Min-priority queue keyed by element identity
///
/// Each element carries an `f64` priority. The element with the smallest
/// priority is returned first; among equal priorities no order is
/// guaranteed. Callers that need a deterministic tie-break must fold a
/// secondary key into the priority or into the element type.
///
/// # Example
///
/// ```rust
/// use indexed_minpq::{IndexedMinPQ, MinPQ, MinPQError};
///
/// let mut pq = IndexedMinPQ::new();
/// pq.add("a", 5.0).unwrap();
/// pq.add("b", 2.0).unwrap();
/// pq.add("c", 8.0).unwrap();
/// assert_eq!(pq.peek_min(), Ok(&"b"));
///
/// pq.change_priority(&"a", 1.0).unwrap();
/// assert_eq!(pq.remove_min(), Ok("a"));
/// assert_eq!(pq.remove_min(), Ok("b"));
/// assert_eq!(pq.remove_min(), Ok("c"));
/// assert_eq!(pq.remove_min(), Err(MinPQError::EmptyQueue));
/// ```
pub trait MinPQ<E: Eq + Hash + Clone> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element with the given priority
    ///
    /// # Errors
    /// - [`MinPQError::InvalidArgument`] if `priority` is NaN
    /// - [`MinPQError::DuplicateElement`] if `element` is already present
    fn add(&mut self, element: E, priority: f64) -> Result<(), MinPQError>;

    /// Returns true if the element is present
    fn contains(&self, element: &E) -> bool;

    /// Returns the current priority of `element`
    ///
    /// # Errors
    /// [`MinPQError::NoSuchElement`] if the element is absent
    fn get_priority(&self, element: &E) -> Result<f64, MinPQError>;

    /// Returns the element with the minimum priority without removing it
    ///
    /// # Errors
    /// [`MinPQError::EmptyQueue`] if the queue is empty
    fn peek_min(&self) -> Result<&E, MinPQError>;

    /// Removes and returns the element with the minimum priority
    ///
    /// # Errors
    /// [`MinPQError::EmptyQueue`] if the queue is empty
    fn remove_min(&mut self) -> Result<E, MinPQError>;

    /// Replaces the priority of an element already in the queue
    ///
    /// # Errors
    /// - [`MinPQError::InvalidArgument`] if `priority` is NaN
    /// - [`MinPQError::NoSuchElement`] if the element is absent
    fn change_priority(&mut self, element: &E, priority: f64) -> Result<(), MinPQError>;

    /// Removes `element` wherever it sits, returning its priority
    ///
    /// # Errors
    /// [`MinPQError::NoSuchElement`] if the element is absent
    fn remove(&mut self, element: &E) -> Result<f64, MinPQError>;

    /// Adds the element if absent, otherwise changes its priority
    ///
    /// This is the only mutation that accepts both present and absent
    /// elements. It is meant for running tallies where the caller does not
    /// want to branch on membership.
    ///
    /// # Errors
    /// [`MinPQError::InvalidArgument`] if `priority` is NaN. A NaN is never
    /// silently dropped, whichever branch would have been taken.
    fn add_or_change_priority(&mut self, element: E, priority: f64) -> Result<(), MinPQError> {
        if self.contains(&element) {
            self.change_priority(&element, priority)
        } else {
            self.add(element, priority)
        }
    }
}
