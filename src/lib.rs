//! Indexed Min-Priority Queues for Rust
//!
//! This crate provides a mutable min-priority queue whose elements are
//! addressed by identity: each element appears at most once and its priority
//! can be changed in place in O(log n).
//!
//! # Features
//!
//! - **IndexedMinPQ**: binary heap plus an element-to-slot index; O(log n) add,
//!   remove-min, change-priority and remove; O(1) peek, contains and get-priority
//! - **NaiveMinPQ**: element-to-priority map with O(n) remove-min, kept as a
//!   reference implementation for differential testing
//! - **SharedMinPQ**: either queue behind a single lock for use across threads
//! - **BoundedTopK**: keeps the K heaviest elements of a stream
//! - **Dijkstra**: shortest paths generic over the queue variant
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::{IndexedMinPQ, MinPQ};
//!
//! let mut pq = IndexedMinPQ::new();
//! pq.add("a", 5.0).unwrap();
//! pq.add("b", 2.0).unwrap();
//! pq.change_priority(&"a", 1.0).unwrap();
//! assert_eq!(pq.peek_min(), Ok(&"a"));
//! ```

pub mod heap;
pub mod naive;
pub mod pathfinding;
pub mod report;
pub mod shared;
pub mod topk;
pub mod traits;

// Re-export the main types for convenience
pub use heap::IndexedMinPQ;
pub use naive::NaiveMinPQ;
pub use shared::SharedMinPQ;
pub use traits::{MinPQ, MinPQError};
