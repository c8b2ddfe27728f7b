use elevator_sim::simulation::{Dispatch, DispatchRule, ElevatorId, ElevatorUpdateResult};
use log::info;

/// Counters collected by the driver while it runs the fleet
#[derive(Debug, Default)]
pub struct SimulationStats {
    pub ticks: u32,
    /// Status reports printed so far, used to number them
    pub reports: usize,
    pub pickup_calls: u32,
    pub floor_selections: u32,
    pub arrivals: u32,
    pub intermediate_stops: u32,
    pub en_route_dispatches: u32,
    pub idle_dispatches: u32,
    pub least_loaded_dispatches: u32,
}

impl SimulationStats {
    /// Count what happened during one fleet step
    pub fn record_step(&mut self, results: &[(ElevatorId, ElevatorUpdateResult)]) {
        self.ticks += 1;
        for (_, result) in results {
            match result {
                ElevatorUpdateResult::Arrived(_) => self.arrivals += 1,
                ElevatorUpdateResult::StoppedAt(_) => self.intermediate_stops += 1,
                ElevatorUpdateResult::Idle | ElevatorUpdateResult::Moving => {}
            }
        }
    }

    pub fn record_dispatch(&mut self, dispatch: &Dispatch) {
        self.pickup_calls += 1;
        match dispatch.rule {
            DispatchRule::EnRoute => self.en_route_dispatches += 1,
            DispatchRule::NearestIdle => self.idle_dispatches += 1,
            DispatchRule::LeastLoaded => self.least_loaded_dispatches += 1,
        }
    }

    pub fn record_floor_selection(&mut self) {
        self.floor_selections += 1;
    }

    /// Hand out the number for the next status report
    pub fn next_report(&mut self) -> usize {
        let counter = self.reports;
        self.reports += 1;
        counter
    }

    pub fn log_summary(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Ticks run: {}", self.ticks);
        info!("Pickup calls: {}", self.pickup_calls);
        info!("Floor selections: {}", self.floor_selections);
        info!("Arrivals: {}", self.arrivals);
        info!("Intermediate stops: {}", self.intermediate_stops);
        info!("En-route dispatches: {}", self.en_route_dispatches);
        info!("Nearest-idle dispatches: {}", self.idle_dispatches);
        info!("Least-loaded dispatches: {}", self.least_loaded_dispatches);
    }
}
