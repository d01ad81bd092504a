//! Minimal discrete-event plumbing: a time-ordered queue of scheduled items.
//!
//! The queue is a min-heap by timestamp with a FIFO tie-break for items
//! scheduled at exactly the same time. Model semantics live in the model
//! crates; this crate only decides what fires next.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Simulation timestamp. Continuous time, compared with `f64::total_cmp`.
pub type Timestamp = f64;

#[derive(Debug)]
struct Scheduled<T> {
    t: Timestamp,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.t.total_cmp(&other.t) == Ordering::Equal && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> Ord for Scheduled<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap pops the earliest time first; exactly
        // equal times fall back to insertion order (lower seq pops first).
        other
            .t
            .total_cmp(&self.t)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A time-ordered queue of scheduled items.
///
/// Items pop in ascending timestamp order regardless of push order. Items
/// pushed with exactly the same timestamp pop in the order they were
/// pushed; the tie-break is part of the contract because simultaneous-event
/// order is observable in simulation output.
#[derive(Debug)]
pub struct EventQueue<T> {
    heap: BinaryHeap<Scheduled<T>>,
    next_seq: u64,
}

impl<T> EventQueue<T> {
    pub fn new() -> EventQueue<T> {
        EventQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `item` to fire at time `t`.
    pub fn push(&mut self, t: Timestamp, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { t, seq, item });
    }

    /// Remove and return the earliest item. `None` means the queue is
    /// exhausted, the normal termination signal rather than an error.
    pub fn pop(&mut self) -> Option<(Timestamp, T)> {
        self.heap.pop().map(|scheduled| (scheduled.t, scheduled.item))
    }

    /// Timestamp of the next item to fire, without removing it.
    pub fn peek_time(&self) -> Option<Timestamp> {
        self.heap.peek().map(|scheduled| scheduled.t)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> EventQueue<T> {
        EventQueue::new()
    }
}
