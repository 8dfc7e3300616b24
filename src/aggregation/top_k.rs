use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Retains the `capacity` items with the largest durations seen so far.
///
/// Memory stays bounded by the capacity no matter how many items are
/// offered. Ties on duration always favour the item that arrived first,
/// both when deciding what to keep and in [`TopKTracker::drain`] order.
#[derive(Debug, Clone)]
pub struct TopKTracker<T> {
    capacity: usize,
    /// Min-heap: the root is the entry that would be evicted next
    heap: BinaryHeap<Reverse<Ranked<T>>>,
    arrivals: u64,
}

/// An item retained by a [`TopKTracker`]
#[derive(Debug, Clone)]
pub struct Ranked<T> {
    /// The retained item
    pub item: T,
    /// Duration it was ranked by
    pub duration: i64,
    /// Position in the offer sequence, starting at 0
    pub arrival: u64,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Higher duration ranks higher; among equal durations the earlier arrival does.
impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.duration
            .cmp(&other.duration)
            .then_with(|| other.arrival.cmp(&self.arrival))
    }
}

impl<T> TopKTracker<T> {
    /// Create an empty tracker holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
            arrivals: 0,
        }
    }

    /// Maximum number of retained items
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently retained
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is retained
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of items offered so far
    pub fn offered(&self) -> u64 {
        self.arrivals
    }

    /// Smallest retained duration, if any
    pub fn min_duration(&self) -> Option<i64> {
        self.heap.peek().map(|Reverse(entry)| entry.duration)
    }

    /// Offer an item; returns whether it was retained.
    ///
    /// When the tracker is full the item replaces the current minimum only if
    /// its duration is strictly greater, so equal durations never evict an
    /// earlier arrival.
    pub fn offer(&mut self, item: T, duration: i64) -> bool {
        let arrival = self.arrivals;
        self.arrivals += 1;
        self.insert(Ranked {
            item,
            duration,
            arrival,
        })
    }

    fn insert(&mut self, entry: Ranked<T>) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(entry));
            return true;
        }
        // Within one offer sequence the newcomer always arrived last, so this
        // reduces to a strict duration comparison against the minimum.
        match self.heap.peek_mut() {
            Some(mut min) if entry > min.0 => {
                *min = Reverse(entry);
                true
            }
            _ => false,
        }
    }

    /// Remove and return every retained item, longest first.
    ///
    /// Equal durations come out in arrival order. The tracker is empty
    /// afterwards but keeps its capacity and arrival counter.
    pub fn drain(&mut self) -> Vec<Ranked<T>> {
        std::mem::take(&mut self.heap)
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(entry)| entry)
            .collect()
    }

    /// Fold in a tracker that observed the continuation of this tracker's
    /// stream.
    ///
    /// The other tracker's items are re-offered in their original arrival
    /// order, so the result equals a single tracker fed both segments back
    /// to back.
    pub fn merge(&mut self, mut later: TopKTracker<T>) {
        let mut entries = later.drain();
        entries.sort_by_key(|entry| entry.arrival);
        let base = self.arrivals;
        for entry in entries {
            self.insert(Ranked {
                arrival: base + entry.arrival,
                ..entry
            });
        }
        self.arrivals = base + later.arrivals;
    }
}
