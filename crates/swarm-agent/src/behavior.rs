//! Behaviors: stateful multi-tick plans built from primitive actions.
//!
//! Common lifecycle: `start` (optional setup), `update` (one tick; returns
//! `true` from the tick completion becomes true, idempotently thereafter),
//! `stop` (teardown hook when superseded or cancelled).
//!
//! Shared edge policy: `update` after completion is a no-op returning
//! `true`; a negative step/loop limit means unbounded, zero is a valid
//! limit reached immediately.

use std::collections::VecDeque;

use tracing::warn;

use swarm_core::{BehaviorPlan, Direction, Position};
use swarm_grid::Grid;

use crate::{Action, Drone};

/// A drone's active plan.  Closed variant set; one dispatch function per
/// lifecycle operation.
#[derive(Debug)]
pub enum Behavior {
    MoveTo(MoveTo),
    Explore(Explore),
    Patrol(Patrol),
    Search(Search),
}

impl Behavior {
    pub fn move_to(target: Position) -> Self {
        Behavior::MoveTo(MoveTo::new(target))
    }

    pub fn explore(steps: i32) -> Self {
        Behavior::Explore(Explore::new(steps))
    }

    pub fn patrol(waypoints: Vec<Position>, loops: i32) -> Self {
        Behavior::Patrol(Patrol::new(waypoints, loops))
    }

    pub fn search(steps_between_scans: u32, scan_range: u32, max_steps: i32) -> Self {
        Behavior::Search(Search::new(steps_between_scans, scan_range, max_steps))
    }

    /// Instantiate a live behavior from its plain-data plan.
    pub fn from_plan(plan: &BehaviorPlan) -> Self {
        match plan {
            BehaviorPlan::MoveTo { target } => Behavior::move_to(*target),
            BehaviorPlan::Explore { steps } => Behavior::explore(*steps),
            BehaviorPlan::Patrol { waypoints, loops } => {
                Behavior::patrol(waypoints.clone(), *loops)
            }
            BehaviorPlan::Search { steps_between_scans, scan_range, max_steps } => {
                Behavior::search(*steps_between_scans, *scan_range, *max_steps)
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        match self {
            Behavior::MoveTo(b) => b.completed,
            Behavior::Explore(b) => b.completed,
            Behavior::Patrol(b) => b.completed,
            Behavior::Search(b) => b.completed,
        }
    }

    /// Wire name of the variant, matching the command layer's
    /// `behavior_type` vocabulary.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Behavior::MoveTo(_) => "move_to",
            Behavior::Explore(_) => "explore",
            Behavior::Patrol(_) => "patrol",
            Behavior::Search(_) => "search",
        }
    }

    /// Setup before the first update.  Only MoveTo has work to do: it plans
    /// its path from the drone's current position.
    pub fn start(&mut self, drone: &Drone, grid: &Grid) {
        if let Behavior::MoveTo(b) = self {
            b.start(drone, grid);
        }
    }

    /// Advance the plan by one tick, executing at most one action.
    pub fn update(&mut self, drone: &mut Drone, grid: &mut Grid) -> bool {
        match self {
            Behavior::MoveTo(b) => b.update(drone, grid),
            Behavior::Explore(b) => b.update(drone, grid),
            Behavior::Patrol(b) => b.update(drone, grid),
            Behavior::Search(b) => b.update(drone, grid),
        }
    }

    /// Teardown when superseded or cancelled.  No variant currently holds
    /// resources beyond its own plan state, so this is a uniform no-op hook.
    pub fn stop(&mut self, _drone: &mut Drone) {}
}

// ── MoveTo ────────────────────────────────────────────────────────────────────

/// Walk directly to a target cell, one move per tick, replanning when the
/// plan runs dry or a move is blocked.
///
/// Path planning uses an axis-priority rule: the x mismatch is resolved
/// completely before the y mismatch, giving a Manhattan-distance path with
/// a fixed tie-break.
#[derive(Debug)]
pub struct MoveTo {
    target: Position,
    path: VecDeque<Action>,
    current: Option<Action>,
    completed: bool,
}

impl MoveTo {
    pub fn new(target: Position) -> Self {
        Self {
            target,
            path: VecDeque::new(),
            current: None,
            completed: false,
        }
    }

    pub fn target(&self) -> Position {
        self.target
    }

    fn start(&mut self, drone: &Drone, grid: &Grid) {
        if let Some(from) = drone.position(grid) {
            self.plan(from);
        }
    }

    /// Recompute the whole path from `from` to the target.
    fn plan(&mut self, from: Position) {
        self.path.clear();
        let mut cursor = from;
        while cursor != self.target {
            let direction = if cursor.x < self.target.x {
                Direction::Right
            } else if cursor.x > self.target.x {
                Direction::Left
            } else if cursor.y < self.target.y {
                Direction::Down
            } else {
                Direction::Up
            };
            self.path.push_back(Action::move_in(direction));
            cursor = cursor.step(direction);
        }
    }

    fn update(&mut self, drone: &mut Drone, grid: &mut Grid) -> bool {
        if self.completed {
            return true;
        }

        // An off-grid target can never be reached; every replan would fail
        // the same way, so complete as a logged no-op instead of replanning
        // forever.
        if !grid.is_valid_position(self.target) {
            warn!(drone = %drone.id, target = %self.target, "move_to: target off-grid");
            self.completed = true;
            return true;
        }

        let Some(before) = drone.position(grid) else {
            warn!(drone = %drone.id, "move_to: drone entity not in registry");
            self.completed = true;
            return true;
        };

        if before == self.target {
            self.completed = true;
            return true;
        }

        if self.current.is_none() {
            if self.path.is_empty() {
                self.plan(before);
            }
            self.current = self.path.pop_front();
        }

        if let Some(action) = self.current.as_mut() {
            if action.execute(drone.id, drone.entity, grid) {
                self.current = None;
                let after = drone.position(grid).unwrap_or(before);
                if after == self.target {
                    self.completed = true;
                    return true;
                }
                // Off-course: the move was blocked (no progress) or the plan
                // ran dry short of the target.  Replan from where we are.
                if after == before || self.path.is_empty() {
                    self.plan(after);
                }
            }
        }

        false
    }
}

// ── Explore ───────────────────────────────────────────────────────────────────

/// Uniform random cardinal walk.  Blocked moves still count as steps — the
/// attempt completed.
#[derive(Debug)]
pub struct Explore {
    steps: i32,
    taken: i32,
    current: Option<Action>,
    completed: bool,
}

impl Explore {
    pub fn new(steps: i32) -> Self {
        Self { steps, taken: 0, current: None, completed: false }
    }

    fn update(&mut self, drone: &mut Drone, grid: &mut Grid) -> bool {
        if self.completed {
            return true;
        }

        if self.steps >= 0 && self.taken >= self.steps {
            self.completed = true;
            return true;
        }

        if self.current.is_none() {
            let direction = drone
                .rng
                .choose(&Direction::CARDINAL)
                .copied()
                .unwrap_or(Direction::Stay);
            self.current = Some(Action::move_in(direction));
        }

        if let Some(action) = self.current.as_mut() {
            if action.execute(drone.id, drone.entity, grid) {
                self.current = None;
                self.taken += 1;
            }
        }

        false
    }
}

// ── Patrol ────────────────────────────────────────────────────────────────────

/// Cycle through waypoints in fixed order, wrapping to index 0 after the
/// last.  Owns one transient nested [`MoveTo`] at a time — a single-owner
/// field, never a cycle.
///
/// Termination is evaluated whenever a new leg is needed, before the next
/// MoveTo is instantiated, so `loops = L` over `W` waypoints yields exactly
/// `L·W` leg completions.
#[derive(Debug)]
pub struct Patrol {
    waypoints: Vec<Position>,
    index: usize,
    loops: i32,
    completed_loops: i32,
    leg: Option<MoveTo>,
    completed: bool,
}

impl Patrol {
    pub fn new(waypoints: Vec<Position>, loops: i32) -> Self {
        Self {
            waypoints,
            index: 0,
            loops,
            completed_loops: 0,
            leg: None,
            completed: false,
        }
    }

    fn update(&mut self, drone: &mut Drone, grid: &mut Grid) -> bool {
        if self.completed {
            return true;
        }

        if self.waypoints.is_empty() {
            self.completed = true;
            return true;
        }

        let need_new_leg = self.leg.as_ref().is_none_or(|leg| leg.completed);
        if need_new_leg {
            if self.loops >= 0 && self.completed_loops >= self.loops {
                self.completed = true;
                return true;
            }

            let mut leg = MoveTo::new(self.waypoints[self.index]);
            leg.start(drone, grid);

            self.index = (self.index + 1) % self.waypoints.len();
            if self.index == 0 {
                self.completed_loops += 1;
            }
            self.leg = Some(leg);
        }

        if let Some(leg) = self.leg.as_mut() {
            leg.update(drone, grid);
        }
        false
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Random walk interleaved with periodic scanning: after every
/// `steps_between_scans` completed moves, one `Scan(scan_range)` runs and
/// the cadence counter resets.  Only move completions advance the cadence
/// and cumulative counters.
#[derive(Debug)]
pub struct Search {
    steps_between_scans: u32,
    scan_range: u32,
    max_steps: i32,
    since_scan: u32,
    total_steps: i32,
    current: Option<Action>,
    completed: bool,
}

impl Search {
    pub fn new(steps_between_scans: u32, scan_range: u32, max_steps: i32) -> Self {
        Self {
            steps_between_scans,
            scan_range,
            max_steps,
            since_scan: 0,
            total_steps: 0,
            current: None,
            completed: false,
        }
    }

    fn update(&mut self, drone: &mut Drone, grid: &mut Grid) -> bool {
        if self.completed {
            return true;
        }

        if self.max_steps >= 0 && self.total_steps >= self.max_steps {
            self.completed = true;
            return true;
        }

        if self.current.is_none() {
            if self.since_scan >= self.steps_between_scans {
                self.current = Some(Action::scan(self.scan_range));
                self.since_scan = 0;
            } else {
                let direction = drone
                    .rng
                    .choose(&Direction::CARDINAL)
                    .copied()
                    .unwrap_or(Direction::Stay);
                self.current = Some(Action::move_in(direction));
            }
        }

        if let Some(action) = self.current.as_mut() {
            if action.execute(drone.id, drone.entity, grid) {
                if action.is_move() {
                    self.since_scan += 1;
                    self.total_steps += 1;
                }
                self.current = None;
            }
        }

        false
    }
}
