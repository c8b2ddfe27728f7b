//! Elevator state machine for the simulation
//!
//! Each elevator is either idle (`current_floor == next_floor`) or moving one
//! floor per step towards `next_floor`. The door flag is derived from what
//! happened on the last step.

use std::fmt;

use log::trace;

use super::stop_queue::StopQueue;
use super::types::{ElevatorId, Floor, GROUND_FLOOR};

/// Result of an elevator step indicating what happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorUpdateResult {
    Idle,             // Nothing to do, elevator stayed put
    Moving,           // Passed a floor without stopping
    StoppedAt(Floor), // Served a queued stop on the way
    Arrived(Floor),   // Reached its destination
}

/// One cabin in the simulated bank
#[derive(Debug, Clone)]
pub struct SimElevator {
    pub id: ElevatorId,
    pub current_floor: Floor,
    /// Destination floor; equal to `current_floor` when idle
    pub next_floor: Floor,
    pub has_open_doors: bool,
    pub pending_stops: StopQueue,
}

impl SimElevator {
    /// Create an idle elevator on the ground floor with its doors open
    pub fn new(id: ElevatorId, num_floors: usize) -> Self {
        Self {
            id,
            current_floor: GROUND_FLOOR,
            next_floor: GROUND_FLOOR,
            has_open_doors: true,
            pending_stops: StopQueue::with_capacity(num_floors),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.current_floor == self.next_floor
    }

    fn should_move_down(&self) -> bool {
        self.current_floor > self.next_floor
    }

    /// Adopt the head of the queue as the new destination.
    /// Returns false when there is nothing queued.
    fn take_next_destination(&mut self) -> bool {
        match self.pending_stops.dequeue_head() {
            Some(floor) => {
                self.next_floor = floor;
                true
            }
            None => false,
        }
    }

    /// Press a button inside the cabin.
    /// Returns true if the floor was newly queued.
    pub fn choose_floor(&mut self, floor: Floor) -> bool {
        self.pending_stops.push_unique(floor)
    }

    /// Advance the elevator by one discrete step
    pub fn advance(&mut self) -> ElevatorUpdateResult {
        if self.is_idle() && !self.take_next_destination() {
            return ElevatorUpdateResult::Idle;
        }

        // A destination equal to the current floor still moves up first
        if self.should_move_down() {
            self.current_floor -= 1;
        } else {
            self.current_floor += 1;
        }

        trace!(
            "Elevator {} at floor {} heading to {}",
            self.id,
            self.current_floor,
            self.next_floor
        );

        if self.is_idle() {
            self.has_open_doors = true;
            // Continue straight to the next queued stop
            self.take_next_destination();
            return ElevatorUpdateResult::Arrived(self.current_floor);
        }

        let served = self.pending_stops.remove_all(self.current_floor);
        self.has_open_doors = served > 0;
        if self.has_open_doors {
            ElevatorUpdateResult::StoppedAt(self.current_floor)
        } else {
            ElevatorUpdateResult::Moving
        }
    }

    /// Read-only copy of the state for display
    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            current_floor: self.current_floor,
            next_floor: self.next_floor,
            has_open_doors: self.has_open_doors,
            pending_stops: self.pending_stops.to_vec(),
        }
    }
}

/// Per-elevator status as reported to the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub id: ElevatorId,
    pub current_floor: Floor,
    pub next_floor: Floor,
    pub has_open_doors: bool,
    pub pending_stops: Vec<Floor>,
}

impl fmt::Display for ElevatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elevator ID: {:2}", self.id.0)?;
        write!(
            f,
            "\tCurrent floor: {:2} || Next floor: {:2} || Has open doors: {} || Floors in queue: ",
            self.current_floor,
            self.next_floor,
            u8::from(self.has_open_doors)
        )?;
        for floor in &self.pending_stops {
            write!(f, "{}, ", floor)?;
        }
        Ok(())
    }
}
