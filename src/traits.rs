//! Common traits for indexed heap elements
//!
//! This module provides the capability contract an element must satisfy to be
//! stored in an [`IndexedPriorityQueue`](crate::indexed::IndexedPriorityQueue):
//!
//! - [`Heapable`]: priority comparison plus a *position slot* the queue uses to
//!   remember where the element sits in its backing array
//! - [`QueueError`]: the two caller-recoverable failure conditions
//!
//! The position slot is what lets the queue locate a specific element in O(1)
//! when the caller asks to update or remove it, without a linear scan.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `pop` was called on a queue with no elements
    EmptyQueue,
    /// The element's position slot does not refer to a current index
    InvalidIndex {
        /// The position reported by the element
        position: usize,
        /// The queue length at the time of the call
        len: usize,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "priority queue is empty"),
            QueueError::InvalidIndex { position, len } => {
                write!(
                    f,
                    "element position {} is out of range for queue of length {}",
                    position, len
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Capability contract for elements stored in an indexed priority queue
///
/// Implementors supply a strict priority relation and storage for one `usize`,
/// the position slot. The queue writes the slot through [`set_position`]
/// every time it moves the element and never otherwise; the element must hand
/// the same value back from [`position`].
///
/// # Contract
///
/// `higher_priority` should behave like a strict weak ordering (irreflexive,
/// transitive). A comparator that breaks this does not cause a panic, but
/// the order in which elements are popped is then unspecified.
///
/// # Example
///
/// ```rust
/// use rust_indexed_heap::{Heapable, IndexedPriorityQueue};
///
/// struct Job {
///     urgency: u32,
///     slot: usize,
/// }
///
/// impl Heapable for Job {
///     fn higher_priority(&self, other: &Self) -> bool {
///         self.urgency > other.urgency
///     }
///     fn position(&self) -> usize {
///         self.slot
///     }
///     fn set_position(&mut self, position: usize) {
///         self.slot = position;
///     }
/// }
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.push(Job { urgency: 1, slot: 0 });
/// queue.push(Job { urgency: 7, slot: 0 });
/// assert_eq!(queue.pop().unwrap().urgency, 7);
/// ```
///
/// [`set_position`]: Heapable::set_position
/// [`position`]: Heapable::position
pub trait Heapable {
    /// Returns true if `self` should leave the queue before `other`
    fn higher_priority(&self, other: &Self) -> bool;

    /// Returns the position slot last written by the queue
    fn position(&self) -> usize;

    /// Records the element's current index in the queue's backing array
    fn set_position(&mut self, position: usize);
}

/// Shared handles delegate to the element they point at.
///
/// This is the usual way to keep a reference to an enqueued element: the
/// caller holds one clone of the `Rc`, the queue holds another, and priority
/// changes go through `borrow_mut` before calling `update`.
///
/// The queue borrows elements during every operation, so a `RefMut` (or a
/// `Ref` to an element the queue moves) held across a queue call panics.
impl<H: Heapable> Heapable for Rc<RefCell<H>> {
    fn higher_priority(&self, other: &Self) -> bool {
        self.borrow().higher_priority(&other.borrow())
    }

    fn position(&self) -> usize {
        self.borrow().position()
    }

    fn set_position(&mut self, position: usize) {
        self.borrow_mut().set_position(position);
    }
}
