//! Indexed Binary Heap for Rust
//!
//! This crate provides [`IndexedPriorityQueue`], a binary max-heap whose
//! elements remember their own position in the heap. Besides the usual push,
//! peek and pop, that makes two more operations logarithmic:
//!
//! - **update**: re-establish order after an enqueued element's priority was
//!   changed in place
//! - **remove**: delete a specific element from anywhere in the heap
//!
//! Elements implement the [`Heapable`] trait: a strict priority comparison plus
//! a position slot the queue rewrites on every move. [`Prioritized`] is a
//! ready-made element for `Ord` priorities, and [`Shared`] handles let callers
//! keep referring to elements while they are enqueued.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events from queue operations
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::{shared, IndexedPriorityQueue, Prioritized, QueueError};
//!
//! let mut queue = IndexedPriorityQueue::new();
//! let handles: Vec<_> = [10, 8, 12, 9]
//!     .into_iter()
//!     .map(|p| shared(Prioritized::new(p, ())))
//!     .collect();
//! for handle in &handles {
//!     queue.push(handle.clone());
//! }
//!
//! handles[1].borrow_mut().set_priority(20);
//! queue.update(&handles[1]).unwrap();
//!
//! assert_eq!(*queue.pop().unwrap().borrow().priority(), 20);
//! assert_eq!(queue.len(), 3);
//!
//! queue.remove(&handles[2]).unwrap();
//! assert_eq!(*queue.pop().unwrap().borrow().priority(), 10);
//! assert_eq!(*queue.pop().unwrap().borrow().priority(), 9);
//! assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
//! ```

pub mod entry;
pub mod indexed;
pub mod traits;
mod tracing_compat;

// Re-export the main types for convenience
pub use entry::{shared, Prioritized, Shared};
pub use indexed::IndexedPriorityQueue;
pub use traits::{Heapable, QueueError};
