use std::cell::RefCell;
use std::rc::Rc;

use swarm_agent::{Action, DroneMode};
use swarm_command::{CommandError, CommandResult, Envelope, MockTranslator, Translator};
use swarm_core::{ActionRequest, BehaviorPlan, Direction, DroneId, Position};
use swarm_events::{topics, DroneCommand, Value};
use swarm_grid::EntityKind;

use crate::{GoalStatus, NoopObserver, SimConfig, SimError, Simulation};

fn sim_with_drone_at(x: i32, y: i32) -> (Simulation, DroneId) {
    let mut sim = Simulation::new(20, 20, 7).unwrap();
    let id = sim.spawn_drone(Position::new(x, y));
    (sim, id)
}

fn set_behavior(sim: &mut Simulation, drone: DroneId, plan: BehaviorPlan) {
    sim.queue_commands([DroneCommand::SetBehavior { drone, plan }]);
}

mod tick_loop_tests {
    use super::*;

    #[test]
    fn queued_commands_apply_at_the_next_tick_boundary() {
        let (mut sim, id) = sim_with_drone_at(5, 5);
        set_behavior(&mut sim, id, BehaviorPlan::MoveTo { target: Position::new(5, 8) });

        // Nothing happens until the tick advances.
        let drone = sim.drone(id).unwrap();
        assert_eq!(drone.mode(), DroneMode::Idle);

        // The batch applies first, so the behavior already moves this tick.
        sim.step();
        let drone = sim.drone(id).unwrap();
        assert_eq!(drone.mode(), DroneMode::Behavior);
        assert_eq!(drone.position(sim.grid()), Some(Position::new(5, 6)));
    }

    #[test]
    fn move_to_completes_in_exactly_five_ticks() {
        let (mut sim, id) = sim_with_drone_at(0, 0);

        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visited);
        sim.grid_mut().subscribe(topics::DRONE_MOVED, move |event, _| {
            if let Some(position) = event.get("position").and_then(Value::as_position) {
                sink.borrow_mut().push(position);
            }
        });

        set_behavior(&mut sim, id, BehaviorPlan::MoveTo { target: Position::new(3, 2) });
        for _ in 0..5 {
            sim.step();
        }

        let drone = sim.drone(id).unwrap();
        assert!(drone.behavior().is_some_and(|b| b.is_completed()));
        assert_eq!(
            *visited.borrow(),
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
                Position::new(3, 1),
                Position::new(3, 2),
            ],
        );
    }

    #[test]
    fn handler_commands_reach_later_drones_within_the_same_tick() {
        let mut sim = Simulation::new(20, 20, 7).unwrap();
        let scout = sim.spawn_drone(Position::new(5, 5));
        let runner = sim.spawn_drone(Position::new(0, 0));
        sim.spawn_target(Position::new(6, 6));
        sim.attach_detector(scout, 2).unwrap();

        sim.grid_mut().subscribe(topics::TARGET_DETECTED, move |_, reactions| {
            reactions.push(DroneCommand::PushAction {
                drone: runner,
                request: ActionRequest::Move(Direction::Right),
            });
        });

        // The scout updates first and detects; the reaction is applied
        // before the runner's update, which therefore moves this very tick.
        sim.step();
        let runner = sim.drone(runner).unwrap();
        assert_eq!(runner.position(sim.grid()), Some(Position::new(1, 0)));
    }

    #[test]
    fn observer_sees_every_tick() {
        struct Counting {
            starts: u64,
            ends: u64,
        }
        impl crate::SimObserver for Counting {
            fn on_tick_start(&mut self, _tick: swarm_core::Tick) {
                self.starts += 1;
            }
            fn on_tick_end(
                &mut self,
                _tick: swarm_core::Tick,
                _drones: &[swarm_agent::Drone],
                _grid: &swarm_grid::Grid,
            ) {
                self.ends += 1;
            }
        }

        let (mut sim, _) = sim_with_drone_at(0, 0);
        let mut observer = Counting { starts: 0, ends: 0 };
        sim.run(8, &mut observer);
        assert_eq!((observer.starts, observer.ends), (8, 8));
        assert_eq!(sim.tick().0, 8);
    }
}

mod behavior_property_tests {
    use super::*;

    #[test]
    fn patrol_two_loops_over_two_waypoints_makes_four_legs() {
        let (mut sim, id) = sim_with_drone_at(0, 0);
        let moves = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&moves);
        sim.grid_mut().subscribe(topics::DRONE_MOVED, move |_, _| {
            *sink.borrow_mut() += 1;
        });

        set_behavior(
            &mut sim,
            id,
            BehaviorPlan::Patrol {
                waypoints: vec![Position::new(0, 0), Position::new(5, 5)],
                loops: 2,
            },
        );

        // Leg 1 completes instantly at (0,0); legs 2-4 each walk 10 cells.
        for _ in 0..31 {
            sim.step();
        }
        assert!(!sim.drone(id).unwrap().behavior().unwrap().is_completed());

        sim.step();
        assert!(sim.drone(id).unwrap().behavior().unwrap().is_completed());
        assert_eq!(*moves.borrow(), 30);
        assert_eq!(sim.drone(id).unwrap().position(sim.grid()), Some(Position::new(5, 5)));
    }

    #[test]
    fn new_behavior_empties_a_three_deep_queue() {
        let (mut sim, id) = sim_with_drone_at(5, 5);
        let drone = sim.drone_mut(id).unwrap();
        drone.add_action(Action::wait(10));
        drone.add_action(Action::wait(10));
        drone.add_action(Action::wait(10));
        assert_eq!(drone.queued_actions(), 3);

        set_behavior(&mut sim, id, BehaviorPlan::Explore { steps: -1 });
        sim.step();

        let drone = sim.drone(id).unwrap();
        assert_eq!(drone.queued_actions(), 0);
        assert_eq!(drone.mode(), DroneMode::Behavior);
    }
}

mod detector_property_tests {
    use super::*;

    fn detections_at(target: Position) -> usize {
        let mut sim = Simulation::new(20, 20, 7).unwrap();
        let id = sim.spawn_drone(Position::new(5, 5));
        sim.attach_detector(id, 2).unwrap();
        sim.spawn_target(target);

        let hits = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&hits);
        sim.grid_mut().subscribe(topics::TARGET_DETECTED, move |_, _| {
            *sink.borrow_mut() += 1;
        });
        sim.step();
        let count = *hits.borrow();
        count
    }

    #[test]
    fn detection_range_is_chebyshev() {
        assert_eq!(detections_at(Position::new(6, 7)), 1); // distance 2
        assert_eq!(detections_at(Position::new(8, 5)), 0); // distance 3
    }

    #[test]
    fn detection_reaction_pauses_the_finder() {
        let mut sim = Simulation::new(20, 20, 7).unwrap();
        let id = sim.spawn_drone(Position::new(5, 5));
        sim.attach_detector(id, 2).unwrap();
        sim.spawn_target(Position::new(6, 6));

        sim.grid_mut().subscribe(topics::TARGET_DETECTED, |event, reactions| {
            if let Some(drone) = event.drone() {
                reactions.push(DroneCommand::ClearBehavior { drone });
                reactions.push(DroneCommand::PushAction { drone, request: ActionRequest::Wait(5) });
            }
        });

        set_behavior(&mut sim, id, BehaviorPlan::Explore { steps: -1 });
        sim.step();

        // The same-tick reaction displaced the behavior with a pause.
        let drone = sim.drone(id).unwrap();
        assert_eq!(drone.mode(), DroneMode::Queue);
        assert!(drone.behavior().is_none());
    }
}

mod goal_tests {
    use super::*;

    struct FailingTranslator;
    impl Translator for FailingTranslator {
        fn translate(&mut self, _goal: &str, _roster: &[DroneId]) -> CommandResult<Envelope> {
            Err(CommandError::Translator("connection refused".to_owned()))
        }
    }

    #[test]
    fn mock_goal_walks_the_first_drone_up_two_right_three() {
        let (mut sim, id) = sim_with_drone_at(5, 5);
        let status = sim.submit_goal("find the targets", &mut MockTranslator);
        // Two clears plus five unit moves.
        assert!(matches!(status, GoalStatus::Accepted { queued: 7, rejected: 0 }));

        sim.run(5, &mut NoopObserver);
        assert_eq!(sim.drone(id).unwrap().position(sim.grid()), Some(Position::new(8, 3)));
    }

    #[test]
    fn refused_goal_queues_nothing() {
        let mut sim = Simulation::new(10, 10, 1).unwrap();
        let status = sim.submit_goal("anything", &mut MockTranslator); // empty roster
        assert!(matches!(status, GoalStatus::Rejected(_)));
    }

    #[test]
    fn translator_failure_is_contained() {
        let (mut sim, id) = sim_with_drone_at(5, 5);
        let status = sim.submit_goal("go", &mut FailingTranslator);
        assert!(matches!(status, GoalStatus::Failed(_)));

        // The tick loop is unaffected.
        sim.step();
        assert_eq!(sim.drone(id).unwrap().position(sim.grid()), Some(Position::new(5, 5)));
    }

    #[test]
    fn text_command_round_trips_to_movement() {
        let (mut sim, id) = sim_with_drone_at(5, 5);
        let queued = sim.submit_text("drone 1 up=2 left=1").unwrap();
        assert_eq!(queued, 2 + 3);

        sim.run(3, &mut NoopObserver);
        assert_eq!(sim.drone(id).unwrap().position(sim.grid()), Some(Position::new(4, 3)));
    }

    #[test]
    fn text_command_for_a_missing_drone_is_an_error() {
        let (mut sim, _) = sim_with_drone_at(5, 5);
        assert!(matches!(
            sim.submit_text("drone 9 up=2"),
            Err(SimError::Command(CommandError::DroneNotFound(9))),
        ));
    }
}

mod determinism_tests {
    use super::*;

    fn positions_after(seed: u64, ticks: u64) -> Vec<Position> {
        let config = SimConfig { seed, ..SimConfig::default() };
        let mut sim = Simulation::from_config(config).unwrap();
        let commands: Vec<_> = sim
            .roster()
            .into_iter()
            .map(|drone| DroneCommand::SetBehavior {
                drone,
                plan: BehaviorPlan::Explore { steps: -1 },
            })
            .collect();
        sim.queue_commands(commands);
        sim.run(ticks, &mut NoopObserver);
        sim.grid().entities().iter().map(|e| e.position).collect()
    }

    #[test]
    fn identical_seeds_replay_identically() {
        assert_eq!(positions_after(11, 40), positions_after(11, 40));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(positions_after(11, 40), positions_after(12, 40));
    }

    #[test]
    fn config_spawns_the_requested_roster() {
        let sim = Simulation::from_config(SimConfig::default()).unwrap();
        assert_eq!(sim.drones().len(), 3);
        assert_eq!(sim.grid().entity_count(), 6);
        assert_eq!(
            sim.grid()
                .entities()
                .iter()
                .filter(|e| e.kind == EntityKind::Target)
                .count(),
            3,
        );
        // Everything spawns on-grid.
        assert!(sim
            .grid()
            .entities()
            .iter()
            .all(|e| sim.grid().is_valid_position(e.position)));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert!(matches!(Simulation::new(0, 5, 1), Err(SimError::Config(_))));
    }
}
