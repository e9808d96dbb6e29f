//! Sharing a queue between threads behind an external lock
//!
//! The queue does no locking of its own. These tests wrap it in a
//! `parking_lot::Mutex` and check that producers and consumers on different
//! threads see a consistent heap.

use parking_lot::Mutex;
use rust_indexed_heap::{IndexedPriorityQueue, Prioritized};
use std::sync::Arc;
use std::thread;

type Queue = IndexedPriorityQueue<Prioritized<u64, usize>>;

#[test]
fn test_parallel_producers() {
    let queue = Arc::new(Mutex::new(Queue::new()));

    let producers: Vec<_> = (0..4)
        .map(|t| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..250u64 {
                    queue.lock().push(Prioritized::new(i * 4 + t as u64, t));
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }

    let mut queue = queue.lock();
    assert_eq!(queue.len(), 1000);
    assert!(queue.verify_invariants());

    for expected in (0..1000u64).rev() {
        assert_eq!(*queue.pop().unwrap().priority(), expected);
    }
}

#[test]
fn test_producers_and_consumers() {
    let queue = Arc::new(Mutex::new(Queue::with_capacity(512)));
    let consumed = Arc::new(Mutex::new(Vec::new()));

    let producers: Vec<_> = (0..2)
        .map(|t| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..500u64 {
                    queue.lock().push(Prioritized::new(i, t));
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..2)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let consumed = Arc::clone(&consumed);
            thread::spawn(move || {
                for _ in 0..200 {
                    // Each pop holds the lock for the whole operation.
                    let popped = queue.lock().pop();
                    if let Ok(element) = popped {
                        consumed.lock().push(*element.priority());
                    }
                }
            })
        })
        .collect();

    for handle in producers.into_iter().chain(consumers) {
        handle.join().unwrap();
    }

    let queue = queue.lock();
    let consumed = consumed.lock();
    assert_eq!(queue.len() + consumed.len(), 1000);
    assert!(queue.verify_invariants());
}
