//! Thread-shareable queue handle
//!
//! The queues in this crate are not safe to mutate from several threads at
//! once: every structural operation rewrites both the heap and its index.
//! [`SharedMinPQ`] puts the whole queue behind one `parking_lot::Mutex`, so
//! the heap and the index are always locked together.
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::{IndexedMinPQ, SharedMinPQ};
//! use std::thread;
//!
//! let shared: SharedMinPQ<IndexedMinPQ<u32>, u32> = SharedMinPQ::default();
//! let workers: Vec<_> = (0..4)
//!     .map(|t| {
//!         let pq = shared.clone();
//!         thread::spawn(move || {
//!             for i in 0..10 {
//!                 pq.add(t * 10 + i, f64::from(i)).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for worker in workers {
//!     worker.join().unwrap();
//! }
//! assert_eq!(shared.len(), 40);
//! ```

use crate::traits::{MinPQ, MinPQError};
use parking_lot::Mutex;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

/// Cloneable handle to a queue guarded by a single lock
pub struct SharedMinPQ<Q, E> {
    inner: Arc<Mutex<Q>>,
    _element: PhantomData<fn(E) -> E>,
}

impl<Q, E> SharedMinPQ<Q, E>
where
    Q: MinPQ<E>,
    E: Eq + Hash + Clone,
{
    /// Wraps an existing queue
    pub fn from_queue(queue: Q) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
            _element: PhantomData,
        }
    }

    /// Runs `f` with exclusive access to the queue
    ///
    /// Use this for compound updates, such as a peek followed by an
    /// eviction, that must not interleave with other threads.
    pub fn with<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Number of elements in the queue
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Adds `element` with `priority`; see [`MinPQ::add`]
    pub fn add(&self, element: E, priority: f64) -> Result<(), MinPQError> {
        self.inner.lock().add(element, priority)
    }

    /// Returns true if `element` is queued
    pub fn contains(&self, element: &E) -> bool {
        self.inner.lock().contains(element)
    }

    /// Returns the priority of `element`
    pub fn get_priority(&self, element: &E) -> Result<f64, MinPQError> {
        self.inner.lock().get_priority(element)
    }

    /// Returns a clone of the minimum element
    ///
    /// The element is cloned because a reference cannot outlive the lock.
    pub fn peek_min(&self) -> Result<E, MinPQError> {
        self.inner.lock().peek_min().cloned()
    }

    /// Removes and returns the minimum element
    pub fn remove_min(&self) -> Result<E, MinPQError> {
        self.inner.lock().remove_min()
    }

    /// Replaces the priority of a queued element
    pub fn change_priority(&self, element: &E, priority: f64) -> Result<(), MinPQError> {
        self.inner.lock().change_priority(element, priority)
    }

    /// Adds `element`, or updates its priority if already queued
    pub fn add_or_change_priority(&self, element: E, priority: f64) -> Result<(), MinPQError> {
        self.inner.lock().add_or_change_priority(element, priority)
    }

    /// Removes `element`, returning its last priority
    pub fn remove(&self, element: &E) -> Result<f64, MinPQError> {
        self.inner.lock().remove(element)
    }

    /// Returns the inner queue if this is the last handle
    pub fn try_unwrap(self) -> Result<Q, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self {
                inner,
                _element: PhantomData,
            })
    }
}

impl<Q, E> Clone for SharedMinPQ<Q, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _element: PhantomData,
        }
    }
}

impl<Q, E> Default for SharedMinPQ<Q, E>
where
    Q: MinPQ<E>,
    E: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::from_queue(Q::new())
    }
}
