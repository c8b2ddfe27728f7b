//! Pending-stops buffer for a single cabin
//!
//! An ordered, duplicate-free FIFO of floors. Removal from the middle keeps
//! the relative order of the remaining stops.

use std::collections::VecDeque;

use super::types::Floor;

/// The floors an elevator still has to visit, oldest request first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopQueue {
    stops: VecDeque<Floor>,
    capacity: usize,
}

impl StopQueue {
    /// Create an empty queue bounded to one entry per floor.
    /// Storage grows on demand; `capacity` is only the bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stops: VecDeque::new(),
            capacity,
        }
    }

    /// Append a floor to the tail.
    /// The caller guarantees the floor is not already queued.
    pub fn enqueue(&mut self, floor: Floor) {
        debug_assert!(!self.contains(floor), "floor {} queued twice", floor);
        debug_assert!(self.stops.len() < self.capacity, "stop queue overflow");
        self.stops.push_back(floor);
    }

    /// Append a floor unless it is already queued.
    /// Returns true if the queue changed.
    pub fn push_unique(&mut self, floor: Floor) -> bool {
        if self.contains(floor) {
            return false;
        }
        self.enqueue(floor);
        true
    }

    /// Remove and return the oldest stop
    pub fn dequeue_head(&mut self) -> Option<Floor> {
        self.stops.pop_front()
    }

    /// Remove the first occurrence of `floor`.
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, floor: Floor) -> bool {
        match self.stops.iter().position(|&f| f == floor) {
            Some(index) => {
                self.stops.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every occurrence of `floor`, returning how many were dropped.
    /// `push_unique` keeps floors distinct, but a queue filled through
    /// `enqueue` in a release build can still hold repeats.
    pub fn remove_all(&mut self, floor: Floor) -> usize {
        let before = self.stops.len();
        self.stops.retain(|&f| f != floor);
        before - self.stops.len()
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.stops.contains(&floor)
    }

    pub fn head(&self) -> Option<Floor> {
        self.stops.front().copied()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.stops.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Floor> {
        self.stops.iter().copied().collect()
    }
}

impl Extend<Floor> for StopQueue {
    /// Queue each floor that is not already present
    fn extend<I: IntoIterator<Item = Floor>>(&mut self, iter: I) {
        for floor in iter {
            self.push_unique(floor);
        }
    }
}
