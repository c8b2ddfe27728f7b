//! The elevator fleet that ties everything together
//!
//! This is the entry point the driver uses: it owns every elevator, advances
//! them in id order and routes requests to them.

use log::debug;

use super::dispatcher::{self, Dispatch};
use super::elevator::{ElevatorSnapshot, ElevatorUpdateResult, SimElevator};
use super::types::{Direction, ElevatorId, Floor, LoadTieBreak};
use crate::config::SimConfig;

/// The fixed-size bank of elevators under management
#[derive(Debug, Clone)]
pub struct SimFleet {
    /// All elevators, indexed by id
    elevators: Vec<SimElevator>,

    /// Number of floors served, which is also each queue's capacity
    num_floors: usize,

    /// Tie-break used by the least-loaded dispatch rule
    tie_break: LoadTieBreak,
}

impl Default for SimFleet {
    fn default() -> Self {
        Self::with_config(&SimConfig::default())
    }
}

impl SimFleet {
    /// Create `num_elevators` idle elevators on the ground floor
    pub fn new(num_elevators: usize, num_floors: usize) -> Self {
        assert!(num_elevators > 0, "a fleet needs at least one elevator");
        assert!(num_floors > 1, "a fleet needs at least two floors");

        let elevators = (0..num_elevators)
            .map(|i| SimElevator::new(ElevatorId(i), num_floors))
            .collect();

        Self {
            elevators,
            num_floors,
            tie_break: LoadTieBreak::default(),
        }
    }

    /// Create a fleet sized and configured from a `SimConfig`
    pub fn with_config(config: &SimConfig) -> Self {
        Self::new(config.num_elevators, config.num_floors).with_tie_break(config.tie_break)
    }

    pub fn with_tie_break(mut self, tie_break: LoadTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn tie_break(&self) -> LoadTieBreak {
        self.tie_break
    }

    pub fn num_floors(&self) -> usize {
        self.num_floors
    }

    pub fn top_floor(&self) -> Floor {
        self.num_floors as Floor - 1
    }

    pub fn len(&self) -> usize {
        self.elevators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevators.is_empty()
    }

    pub fn elevators(&self) -> &[SimElevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> &SimElevator {
        &self.elevators[id.0]
    }

    pub fn elevator_mut(&mut self, id: ElevatorId) -> &mut SimElevator {
        &mut self.elevators[id.0]
    }

    /// Advance every elevator by one discrete step, in id order
    pub fn step(&mut self) -> Vec<(ElevatorId, ElevatorUpdateResult)> {
        self.elevators
            .iter_mut()
            .map(|elevator| (elevator.id, elevator.advance()))
            .collect()
    }

    /// Snapshot every elevator for display
    pub fn report(&self) -> Vec<ElevatorSnapshot> {
        self.elevators.iter().map(SimElevator::snapshot).collect()
    }

    /// Assign a corridor call and return the full dispatch decision
    pub fn dispatch_pickup(&mut self, floor: Floor, direction: Direction) -> Dispatch {
        debug_assert!(self.is_valid_floor(floor), "floor {} out of range", floor);
        let top_floor = self.top_floor();
        dispatcher::request_pickup(&mut self.elevators, floor, direction, top_floor, self.tie_break)
    }

    /// Assign a corridor call and return the id of the elevator answering it
    pub fn request_pickup(&mut self, floor: Floor, direction: Direction) -> ElevatorId {
        self.dispatch_pickup(floor, direction).elevator
    }

    /// Queue a floor chosen from inside one elevator
    pub fn select_floor(&mut self, id: ElevatorId, floor: Floor) {
        debug_assert!(self.is_valid_floor(floor), "floor {} out of range", floor);
        let queued = self.elevators[id.0].choose_floor(floor);
        debug!(
            "Elevator {} floor selection {}{}",
            id,
            floor,
            if queued { "" } else { " (already queued)" }
        );
    }

    pub fn is_valid_floor(&self, floor: Floor) -> bool {
        (0..self.num_floors as Floor).contains(&floor)
    }

    pub fn is_valid_elevator(&self, id: ElevatorId) -> bool {
        id.0 < self.elevators.len()
    }

    /// Status of every elevator, one block per elevator
    pub fn summary(&self) -> String {
        self.report()
            .iter()
            .map(ElevatorSnapshot::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Print the status of every elevator
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }

    /// Render the shafts as text, top floor first
    ///
    /// `[O]` is a cabin with open doors, `[|]` a cabin with closed doors,
    /// `*` a floor the elevator is heading to or has queued.
    pub fn render_shafts(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Shafts ===\n");
        out.push_str("Legend: [O]=Open doors, [|]=Closed doors, *=Stop, .=Empty\n");

        out.push_str("     ");
        for elevator in &self.elevators {
            out.push_str(&format!("{:^4}", elevator.id.0));
        }
        out.push('\n');

        for floor in (0..self.num_floors as Floor).rev() {
            out.push_str(&format!("{:3} |", floor));
            for elevator in &self.elevators {
                let cell = if elevator.current_floor == floor {
                    if elevator.has_open_doors {
                        "[O]"
                    } else {
                        "[|]"
                    }
                } else if elevator.next_floor == floor || elevator.pending_stops.contains(floor) {
                    " * "
                } else {
                    " . "
                };
                out.push_str(cell);
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }

    /// Draw the shafts in the terminal
    pub fn draw_shafts(&self) {
        println!("\n{}", self.render_shafts());
    }
}
