//! Ready-made queue elements
//!
//! [`Prioritized`] pairs an `Ord` priority with an arbitrary payload and
//! implements [`Heapable`] with "greater priority pops first" semantics, so
//! callers that don't need a custom comparator don't have to write one.
//!
//! [`Shared`] is the handle type for elements the caller wants to keep
//! referring to while they are enqueued.
//!
//! # Min-first order
//!
//! The queue is a max-heap. Wrap priorities in [`std::cmp::Reverse`] to pop
//! the smallest first:
//!
//! ```rust
//! use std::cmp::Reverse;
//! use rust_indexed_heap::{IndexedPriorityQueue, Prioritized};
//!
//! let mut queue: IndexedPriorityQueue<_> = [5, 1, 3]
//!     .into_iter()
//!     .map(|d| Prioritized::new(Reverse(d), d))
//!     .collect();
//! assert_eq!(*queue.pop().unwrap().value(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::traits::Heapable;

/// A shared, mutable handle to a queue element
pub type Shared<H> = Rc<RefCell<H>>;

/// Wraps `element` in a [`Shared`] handle
pub fn shared<H: Heapable>(element: H) -> Shared<H> {
    Rc::new(RefCell::new(element))
}

/// An element ordered by an `Ord` priority, carrying a payload
///
/// Equality compares priority and payload only. The position slot is queue
/// bookkeeping and does not take part.
#[derive(Debug, Clone)]
pub struct Prioritized<P, V> {
    priority: P,
    value: V,
    position: usize,
}

impl<P: Ord, V> Prioritized<P, V> {
    /// Creates an element that has not been enqueued yet
    pub fn new(priority: P, value: V) -> Self {
        Self {
            priority,
            value,
            position: 0,
        }
    }

    /// Returns the current priority
    pub fn priority(&self) -> &P {
        &self.priority
    }

    /// Replaces the priority, returning the old one
    ///
    /// If the element is enqueued, call
    /// [`IndexedPriorityQueue::update`](crate::indexed::IndexedPriorityQueue::update)
    /// afterwards.
    pub fn set_priority(&mut self, priority: P) -> P {
        std::mem::replace(&mut self.priority, priority)
    }

    /// Returns the payload
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the payload mutably; the payload never affects ordering
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the element, returning `(priority, value)`
    pub fn into_parts(self) -> (P, V) {
        (self.priority, self.value)
    }
}

impl<P: PartialEq, V: PartialEq> PartialEq for Prioritized<P, V> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.value == other.value
    }
}

impl<P: Eq, V: Eq> Eq for Prioritized<P, V> {}

impl<P: Ord, V> Heapable for Prioritized<P, V> {
    fn higher_priority(&self, other: &Self) -> bool {
        self.priority > other.priority
    }

    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
