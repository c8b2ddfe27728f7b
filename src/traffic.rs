//! Random request generation for headless runs

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use elevator_sim::simulation::{Direction, ElevatorId, Floor};

/// A request the driver feeds into the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Pickup { floor: Floor, direction: Direction },
    SelectFloor { elevator: ElevatorId, floor: Floor },
}

/// Produces corridor calls and cabin selections at a fixed rate per tick
pub struct TrafficGenerator {
    /// Optional seeded RNG for reproducible runs
    rng: Option<StdRng>,
    /// Probability of a corridor call per tick
    request_rate: f64,
}

impl TrafficGenerator {
    pub fn new(seed: Option<u64>, request_rate: f64) -> Self {
        Self {
            rng: seed.map(StdRng::seed_from_u64),
            request_rate,
        }
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::Range<usize>) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    fn random_bool(&mut self, p: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(p),
            None => rand::rng().random_bool(p),
        }
    }

    /// Requests arriving during one tick
    pub fn generate(&mut self, num_floors: usize, num_elevators: usize) -> Vec<Request> {
        let mut requests = Vec::new();
        let top_floor = num_floors as Floor - 1;

        if self.random_bool(self.request_rate) {
            let floor = self.random_range(0..num_floors) as Floor;
            let direction = if floor == 0 {
                Direction::Up
            } else if floor == top_floor || self.random_bool(0.5) {
                Direction::Down
            } else {
                Direction::Up
            };
            requests.push(Request::Pickup { floor, direction });
        }

        // Passengers already inside press buttons half as often
        if self.random_bool(self.request_rate / 2.0) {
            let elevator = ElevatorId(self.random_range(0..num_elevators));
            let floor = self.random_range(0..num_floors) as Floor;
            requests.push(Request::SelectFloor { elevator, floor });
        }

        requests
    }
}
