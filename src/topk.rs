//! Bounded top-K retention
//!
//! Keeps the `K` heaviest elements seen so far in a min-queue, so the
//! lightest retained element is always at the root and eviction is a single
//! `remove_min`.
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::topk::BoundedTopK;
//!
//! let mut top: BoundedTopK<&str> = BoundedTopK::new(3);
//! for (tag, count) in [("wcag111", 7.0), ("wcag121", 3.0), ("wcag122", 9.0), ("wcag131", 1.0)] {
//!     top.offer(tag, count).unwrap();
//! }
//! assert_eq!(top.into_ranked().unwrap(), vec!["wcag122", "wcag111", "wcag121"]);
//! ```

use crate::heap::IndexedMinPQ;
use crate::traits::{check_priority, MinPQ, MinPQError};
use std::hash::Hash;
use std::marker::PhantomData;

/// Outcome of [`BoundedTopK::offer`]
#[derive(Debug, Clone, PartialEq)]
pub enum Offer<E> {
    /// The candidate was added while the queue was below capacity
    Added,
    /// The candidate was already retained and its weight was replaced
    Updated,
    /// The candidate displaced the lightest retained element
    Evicted(E),
    /// The candidate was not heavier than the lightest retained element
    Rejected,
}

/// Retains the `capacity` elements with the largest weights
///
/// A candidate whose weight equals the current minimum does not displace it,
/// so among equal weights the earlier arrival is kept.
#[derive(Debug, Clone)]
pub struct BoundedTopK<E, Q = IndexedMinPQ<E>> {
    capacity: usize,
    queue: Q,
    _element: PhantomData<E>,
}

impl<E, Q> BoundedTopK<E, Q>
where
    E: Eq + Hash + Clone,
    Q: MinPQ<E>,
{
    /// Creates an empty retainer for at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: Q::new(),
            _element: PhantomData,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, element: &E) -> bool {
        self.queue.contains(element)
    }

    /// Offers a candidate with the given weight
    ///
    /// An element that is already retained has its weight replaced in place,
    /// which supports feeding a running tally one increment at a time.
    ///
    /// # Errors
    /// [`MinPQError::InvalidArgument`] if `weight` is NaN
    pub fn offer(&mut self, element: E, weight: f64) -> Result<Offer<E>, MinPQError> {
        check_priority(weight)?;
        if self.queue.contains(&element) {
            self.queue.change_priority(&element, weight)?;
            return Ok(Offer::Updated);
        }
        if self.capacity == 0 {
            return Ok(Offer::Rejected);
        }
        if self.queue.len() < self.capacity {
            self.queue.add(element, weight)?;
            return Ok(Offer::Added);
        }

        let lightest = self.queue.get_priority(self.queue.peek_min()?)?;
        if weight <= lightest {
            return Ok(Offer::Rejected);
        }
        let evicted = self.queue.remove_min()?;
        self.queue.add(element, weight)?;
        Ok(Offer::Evicted(evicted))
    }

    /// Drains the retained elements, heaviest first
    pub fn into_ranked(mut self) -> Result<Vec<E>, MinPQError> {
        let mut ranked = Vec::with_capacity(self.queue.len());
        while !self.queue.is_empty() {
            ranked.push(self.queue.remove_min()?);
        }
        ranked.reverse();
        Ok(ranked)
    }
}
