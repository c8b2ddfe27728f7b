//! Standalone elevator simulation module
//!
//! This module contains the dispatch and motion core: the per-elevator state
//! machine, its stop queue, the corridor call dispatcher and the fleet that
//! owns them. It does no I/O beyond optional status printing.

mod dispatcher;
mod elevator;
mod fleet;
mod stop_queue;
mod types;

pub use dispatcher::{
    is_en_route, least_loaded, nearest_idle, request_pickup, select_elevator, Dispatch,
    DispatchRule,
};
pub use elevator::{ElevatorSnapshot, ElevatorUpdateResult, SimElevator};
pub use fleet::SimFleet;
pub use stop_queue::StopQueue;
pub use types::{
    Direction, ElevatorId, Floor, LoadTieBreak, GROUND_FLOOR, NUM_ELEVATORS, NUM_FLOORS,
};
