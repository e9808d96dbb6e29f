//! Indexed Binary Heap implementation
//!
//! A binary max-heap over elements that implement [`Heapable`]. Each element
//! carries a position slot that the heap keeps equal to the element's index in
//! the backing vector, so a caller holding an element (typically through a
//! shared handle) can ask the heap to update or remove *that* element without
//! a search.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `update`  | O(log n)   |
//! | `remove`  | O(log n)   |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::{shared, IndexedPriorityQueue, Prioritized};
//!
//! let mut queue = IndexedPriorityQueue::new();
//! let low = shared(Prioritized::new(8, "low"));
//! let high = shared(Prioritized::new(12, "high"));
//! queue.push(low.clone());
//! queue.push(high.clone());
//!
//! // Raise `low` above everything else, then tell the queue about it.
//! low.borrow_mut().set_priority(20);
//! queue.update(&low).unwrap();
//!
//! assert_eq!(*queue.pop().unwrap().borrow().value(), "low");
//! queue.remove(&high).unwrap();
//! assert!(queue.is_empty());
//! ```

use crate::traits::{Heapable, QueueError};
use crate::tracing_compat::{debug, trace};

/// A binary max-heap that tracks each element's position
///
/// The element for which [`Heapable::higher_priority`] holds against every
/// other element sits at the root and is returned first by [`pop`].
///
/// The queue is not synchronized. Sharing it across threads requires an
/// external lock, and an element's priority must not change while a queue
/// operation is running.
///
/// [`pop`]: IndexedPriorityQueue::pop
#[derive(Debug)]
pub struct IndexedPriorityQueue<T: Heapable> {
    /// Heap-ordered elements; `data[i].position() == i` for every `i`
    data: Vec<T>,
}

impl<T: Heapable> IndexedPriorityQueue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of enqueued elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element
    ///
    /// The element's position slot is overwritten; whatever it held before
    /// is ignored.
    pub fn push(&mut self, mut element: T) {
        let index = self.data.len();
        element.set_position(index);
        self.data.push(element);
        self.sift_up(index);
        trace!(len = self.data.len(), "pushed element");
    }

    /// Removes and returns the highest-priority element
    ///
    /// The returned element's position slot is left stale.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue has no elements.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        if self.data.is_empty() {
            debug!("pop on empty queue");
            return Err(QueueError::EmptyQueue);
        }

        let top = self.detach(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        trace!(len = self.data.len(), "popped element");
        Ok(top)
    }

    /// Restores heap order after the caller changed `element`'s priority
    ///
    /// Mutate the element first (for a shared handle, through `borrow_mut`),
    /// then call this. The element moves down if it now loses to one of its
    /// children, otherwise up if it now beats its parent.
    ///
    /// Membership is checked only as `element.position() < self.len()`. An
    /// element from another queue, or one already popped, whose stale
    /// position happens to be in range is not detected, and the element
    /// currently at that position is re-sifted instead.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidIndex`] if the element's position slot is
    /// not a current index.
    pub fn update(&mut self, element: &T) -> Result<(), QueueError> {
        let index = self.checked_position(element)?;
        self.fix(index);
        trace!(position = index, "updated element");
        Ok(())
    }

    /// Removes `element` from anywhere in the queue and returns the queue's
    /// copy of it
    ///
    /// The vacated slot is filled with the last element, which is then moved
    /// down or up as needed. Membership is checked the same way as in
    /// [`update`](Self::update).
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidIndex`] if the element's position slot is
    /// not a current index.
    pub fn remove(&mut self, element: &T) -> Result<T, QueueError> {
        let index = self.checked_position(element)?;
        let removed = self.detach(index);
        if index < self.data.len() {
            self.fix(index);
        }

        trace!(position = index, len = self.data.len(), "removed element");
        Ok(removed)
    }

    /// Drops every element
    ///
    /// Position slots of the dropped elements are left stale.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in backing-array order
    ///
    /// Only the first element is guaranteed to be the highest priority.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the queue, returning the backing array in heap order
    ///
    /// Each element's position slot still matches its index in the result.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the queue, returning its elements highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    /// Checks the heap property and position coherence of every element
    ///
    /// This walks the whole array, so it is O(n). Returns false if any child
    /// has higher priority than its parent, or if any element's position slot
    /// differs from its index.
    pub fn verify_invariants(&self) -> bool {
        self.data.iter().enumerate().all(|(index, element)| {
            let coherent = element.position() == index;
            let ordered =
                index == 0 || !element.higher_priority(&self.data[(index - 1) / 2]);
            coherent && ordered
        })
    }

    fn checked_position(&self, element: &T) -> Result<usize, QueueError> {
        let position = element.position();
        let len = self.data.len();
        if position >= len {
            debug!(position, len, "rejected stale element position");
            return Err(QueueError::InvalidIndex { position, len });
        }
        Ok(position)
    }

    /// Swaps two slots and rewrites both position slots
    ///
    /// Every sift step goes through here.
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.data[a].set_position(a);
        self.data[b].set_position(b);
    }

    /// Takes the element at `index` out, moving the last element into its slot
    fn detach(&mut self, index: usize) -> T {
        let detached = self.data.swap_remove(index);
        if let Some(moved) = self.data.get_mut(index) {
            moved.set_position(index);
        }
        detached
    }

    /// Re-sifts the element at `index` in whichever direction is needed
    ///
    /// Returns the index the element ends up at.
    fn fix(&mut self, index: usize) -> usize {
        let settled = self.sift_down(index);
        if settled != index {
            return settled;
        }
        self.sift_up(index)
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].higher_priority(&self.data[parent]) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut best = left;
            if right < len && self.data[right].higher_priority(&self.data[left]) {
                best = right;
            }

            if self.data[best].higher_priority(&self.data[index]) {
                self.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
        index
    }
}

impl<T: Heapable> Default for IndexedPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Heapable> Extend<T> for IndexedPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Heapable> FromIterator<T> for IndexedPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T: Heapable> IntoIterator for &'a IndexedPriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
