//! End-to-end fleet scenarios
//!
//! These drive the fleet the way the command loop does: step, inspect, request.

use elevator_sim::config::SimConfig;
use elevator_sim::simulation::{
    Direction, DispatchRule, ElevatorId, ElevatorUpdateResult, LoadTieBreak, SimFleet,
    NUM_ELEVATORS, NUM_FLOORS,
};

#[test]
fn test_create_fleet() {
    let fleet = SimFleet::new(3, 12);
    assert_eq!(fleet.len(), 3);
    assert_eq!(fleet.num_floors(), 12);
    assert_eq!(fleet.top_floor(), 11);

    for (index, snapshot) in fleet.report().iter().enumerate() {
        assert_eq!(snapshot.id, ElevatorId(index));
        assert_eq!(snapshot.current_floor, 0);
        assert_eq!(snapshot.next_floor, 0);
        assert!(snapshot.has_open_doors);
        assert!(snapshot.pending_stops.is_empty());
    }
}

#[test]
fn test_default_fleet_matches_default_config() {
    let fleet = SimFleet::default();
    assert_eq!(fleet.len(), NUM_ELEVATORS);
    assert_eq!(fleet.num_floors(), NUM_FLOORS);
    assert_eq!(fleet.tie_break(), LoadTieBreak::Last);

    let config = SimConfig {
        num_floors: 8,
        num_elevators: 2,
        tie_break: LoadTieBreak::First,
    };
    let fleet = SimFleet::with_config(&config);
    assert_eq!(fleet.len(), 2);
    assert_eq!(fleet.num_floors(), 8);
    assert_eq!(fleet.tie_break(), LoadTieBreak::First);
}

#[test]
fn test_scenario_pickup_from_idle_fleet() {
    let mut fleet = SimFleet::new(2, NUM_FLOORS);

    let id = fleet.request_pickup(10, Direction::Up);
    assert_eq!(fleet.elevator(id).pending_stops.to_vec(), vec![10]);

    for _ in 0..10 {
        fleet.step();
    }

    let elevator = fleet.elevator(id);
    assert_eq!(elevator.current_floor, 10);
    assert!(elevator.has_open_doors);
    assert!(elevator.pending_stops.is_empty());
}

#[test]
fn test_scenario_descending_elevator_takes_down_call() {
    let mut fleet = SimFleet::new(2, NUM_FLOORS);
    {
        let elevator = fleet.elevator_mut(ElevatorId(1));
        elevator.current_floor = 5;
        elevator.next_floor = 0;
        elevator.has_open_doors = false;
    }

    let dispatch = fleet.dispatch_pickup(2, Direction::Down);
    assert_eq!(dispatch.elevator, ElevatorId(1));
    assert_eq!(dispatch.rule, DispatchRule::EnRoute);
    assert_eq!(fleet.elevator(ElevatorId(1)).pending_stops.to_vec(), vec![2]);

    // 5 -> 4 -> 3 -> 2, where the pickup is served on the way down
    fleet.step();
    fleet.step();
    let results = fleet.step();
    assert_eq!(results[1], (ElevatorId(1), ElevatorUpdateResult::StoppedAt(2)));

    let elevator = fleet.elevator(ElevatorId(1));
    assert!(elevator.has_open_doors);
    assert_eq!(elevator.next_floor, 0);
    assert!(elevator.pending_stops.is_empty());
}

#[test]
fn test_scenario_mid_transit_doors_stay_closed() {
    let mut fleet = SimFleet::new(1, NUM_FLOORS);
    {
        let elevator = fleet.elevator_mut(ElevatorId(0));
        elevator.current_floor = 3;
        elevator.next_floor = 8;
        elevator.has_open_doors = false;
    }
    fleet.select_floor(ElevatorId(0), 6);

    for expected_floor in [4, 5] {
        fleet.step();
        let elevator = fleet.elevator(ElevatorId(0));
        assert_eq!(elevator.current_floor, expected_floor);
        assert!(!elevator.has_open_doors);
    }

    fleet.step();
    let elevator = fleet.elevator(ElevatorId(0));
    assert_eq!(elevator.current_floor, 6);
    assert!(elevator.has_open_doors);
    assert!(elevator.pending_stops.is_empty());
}

#[test]
fn test_scenario_busy_fleet_falls_back_to_least_loaded() {
    let mut fleet = SimFleet::new(3, NUM_FLOORS);
    let busy = [(20, 25, vec![3, 4]), (20, 28, vec![1]), (22, 27, vec![2, 6, 9])];
    for (index, (current, next, queue)) in busy.into_iter().enumerate() {
        let elevator = fleet.elevator_mut(ElevatorId(index));
        elevator.current_floor = current;
        elevator.next_floor = next;
        elevator.pending_stops.extend(queue);
    }

    let dispatch = fleet.dispatch_pickup(15, Direction::Up);
    assert_eq!(dispatch.rule, DispatchRule::LeastLoaded);
    assert_eq!(dispatch.elevator, ElevatorId(1));
    assert_eq!(fleet.elevator(ElevatorId(1)).pending_stops.to_vec(), vec![1, 15]);
}

#[test]
fn test_select_floor_is_idempotent() {
    let mut fleet = SimFleet::new(2, NUM_FLOORS);
    fleet.select_floor(ElevatorId(1), 7);
    fleet.select_floor(ElevatorId(1), 7);
    assert_eq!(fleet.elevator(ElevatorId(1)).pending_stops.to_vec(), vec![7]);
    assert!(fleet.elevator(ElevatorId(0)).pending_stops.is_empty());
}

#[test]
fn test_doors_open_only_on_arrival_or_queued_stop() {
    let mut fleet = SimFleet::new(3, 12);
    let requests: [&[(usize, i32)]; 6] = [
        &[(0, 9), (1, 4), (2, 11)],
        &[(0, 3), (1, 10)],
        &[(2, 5), (0, 1)],
        &[],
        &[(1, 2), (2, 0)],
        &[(0, 6)],
    ];

    for tick in 0..40 {
        if let Some(batch) = requests.get(tick) {
            for &(id, floor) in batch.iter() {
                fleet.select_floor(ElevatorId(id), floor);
            }
        }

        let before: Vec<Vec<i32>> = fleet
            .elevators()
            .iter()
            .map(|e| e.pending_stops.to_vec())
            .collect();

        for (id, result) in fleet.step() {
            if result == ElevatorUpdateResult::Idle {
                continue;
            }
            let elevator = fleet.elevator(id);
            let arrived = matches!(result, ElevatorUpdateResult::Arrived(_));
            let was_queued = before[id.0].contains(&elevator.current_floor);
            assert_eq!(
                elevator.has_open_doors,
                arrived || was_queued,
                "tick {} elevator {}",
                tick,
                id
            );
            // A served floor never lingers in the queue while moving
            if !arrived {
                assert!(!elevator.pending_stops.contains(elevator.current_floor));
            }
        }
    }

    // Every request has been served after enough steps
    assert!(fleet.elevators().iter().all(|e| e.is_idle() && e.pending_stops.is_empty()));
}

#[test]
fn test_render_shafts() {
    let mut fleet = SimFleet::new(2, 4);
    fleet.select_floor(ElevatorId(1), 3);
    fleet.step();

    let rendered = fleet.render_shafts();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "=== Shafts ===");
    assert_eq!(lines.len(), 3 + 4);
    assert_eq!(lines[3], "  3 | .   *  ");
    assert_eq!(lines[5], "  1 | .  [|] ");
    assert_eq!(lines[6], "  0 |[O]  .  ");
}

#[test]
fn test_summary_lists_every_elevator() {
    let fleet = SimFleet::new(3, 10);
    let summary = fleet.summary();
    assert_eq!(summary.matches("Elevator ID:").count(), 3);
    assert!(summary.contains("Elevator ID:  2"));
}
