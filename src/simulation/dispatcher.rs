//! Corridor call assignment for the elevator simulation
//!
//! This module contains the stateless dispatch heuristic. It separates the
//! choice of elevator from the mutation of that elevator's stop queue so the
//! choice can be inspected without side effects.

use log::debug;

use super::elevator::SimElevator;
use super::types::{Direction, ElevatorId, Floor, LoadTieBreak, GROUND_FLOOR};

/// The rule that produced a dispatch decision, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchRule {
    /// A moving elevator will pass the pickup floor in the requested direction
    EnRoute,
    /// The idle elevator closest to the pickup floor
    NearestIdle,
    /// Nobody is idle; the elevator with the shortest stop queue
    LeastLoaded,
}

/// Outcome of selecting an elevator for a pickup call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub elevator: ElevatorId,
    pub rule: DispatchRule,
}

/// Check whether an elevator can absorb a pickup without a detour
///
/// Heading to the extreme floor in the requested direction passes every floor
/// on the way regardless of queue. Otherwise the elevator must already be
/// committed to stop at or beyond the pickup floor with nothing else queued.
pub fn is_en_route(
    elevator: &SimElevator,
    pickup_floor: Floor,
    direction: Direction,
    top_floor: Floor,
) -> bool {
    match direction {
        Direction::Up => {
            elevator.current_floor <= pickup_floor
                && (elevator.next_floor == top_floor
                    || (elevator.next_floor >= pickup_floor && elevator.pending_stops.is_empty()))
        }
        Direction::Down => {
            elevator.current_floor >= pickup_floor
                && (elevator.next_floor == GROUND_FLOOR
                    || (elevator.next_floor <= pickup_floor && elevator.pending_stops.is_empty()))
        }
    }
}

/// Find the idle elevator closest to the pickup floor.
/// Ties keep the lowest id.
pub fn nearest_idle(elevators: &[SimElevator], pickup_floor: Floor) -> Option<ElevatorId> {
    elevators
        .iter()
        .filter(|e| e.is_idle())
        .min_by_key(|e| (e.current_floor - pickup_floor).abs())
        .map(|e| e.id)
}

/// Find the elevator with the shortest stop queue
///
/// With `LoadTieBreak::Last` the scan uses a non-strict comparison, so the
/// last elevator among equally loaded ones is chosen.
pub fn least_loaded(elevators: &[SimElevator], tie_break: LoadTieBreak) -> ElevatorId {
    let mut chosen = ElevatorId(0);
    let mut lowest_load = usize::MAX;

    for elevator in elevators {
        let load = elevator.pending_stops.len();
        let better = match tie_break {
            LoadTieBreak::Last => load <= lowest_load,
            LoadTieBreak::First => load < lowest_load,
        };
        if better {
            lowest_load = load;
            chosen = elevator.id;
        }
    }

    chosen
}

/// Pick the elevator that should answer a corridor call
///
/// # Arguments
/// * `elevators` - The fleet, indexed by elevator id
/// * `pickup_floor` - The floor the call was made from
/// * `direction` - The direction the passenger wants to travel
/// * `top_floor` - The highest floor served by the fleet
/// * `tie_break` - How the least-loaded rule resolves equal queues
pub fn select_elevator(
    elevators: &[SimElevator],
    pickup_floor: Floor,
    direction: Direction,
    top_floor: Floor,
    tie_break: LoadTieBreak,
) -> Dispatch {
    if let Some(elevator) = elevators
        .iter()
        .find(|e| is_en_route(e, pickup_floor, direction, top_floor))
    {
        return Dispatch {
            elevator: elevator.id,
            rule: DispatchRule::EnRoute,
        };
    }

    if let Some(id) = nearest_idle(elevators, pickup_floor) {
        return Dispatch {
            elevator: id,
            rule: DispatchRule::NearestIdle,
        };
    }

    Dispatch {
        elevator: least_loaded(elevators, tie_break),
        rule: DispatchRule::LeastLoaded,
    }
}

/// Assign a corridor call and queue the pickup floor on the chosen elevator
///
/// The queue is left untouched if the floor is already pending there.
pub fn request_pickup(
    elevators: &mut [SimElevator],
    pickup_floor: Floor,
    direction: Direction,
    top_floor: Floor,
    tie_break: LoadTieBreak,
) -> Dispatch {
    let dispatch = select_elevator(elevators, pickup_floor, direction, top_floor, tie_break);
    let queued = elevators[dispatch.elevator.0]
        .pending_stops
        .push_unique(pickup_floor);

    debug!(
        "Pickup at floor {} ({}) -> elevator {} via {:?}{}",
        pickup_floor,
        direction,
        dispatch.elevator,
        dispatch.rule,
        if queued { "" } else { " (already queued)" }
    );

    dispatch
}
