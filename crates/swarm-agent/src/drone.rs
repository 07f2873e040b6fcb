//! The drone: per-tick orchestrator over one behavior XOR an action queue.

use std::collections::VecDeque;

use swarm_core::{DroneId, DroneRng, EntityId, Position};
use swarm_events::DroneCommand;
use swarm_grid::Grid;

use crate::{Action, Behavior, Detector};

/// Which execution mode a drone is in at a tick boundary.  Exactly one
/// holds at any time — the mutual-exclusivity invariant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DroneMode {
    /// An active behavior owns the tick.
    Behavior,
    /// The FIFO action queue drains one action per tick.
    Queue,
    /// Nothing to do; only the detector runs.
    Idle,
}

/// An autonomous grid-bound agent.
///
/// The drone's position lives in the grid registry (keyed by `entity`);
/// the drone itself owns its plan state: at most one active [`Behavior`]
/// or an action queue, plus an optional [`Detector`] and a deterministic
/// per-drone RNG that behaviors draw from.
pub struct Drone {
    pub id: DroneId,
    pub entity: EntityId,
    behavior: Option<Behavior>,
    current_action: Option<Action>,
    queue: VecDeque<Action>,
    detector: Option<Detector>,
    pub(crate) rng: DroneRng,
}

impl Drone {
    pub fn new(id: DroneId, entity: EntityId, global_seed: u64) -> Self {
        Self {
            id,
            entity,
            behavior: None,
            current_action: None,
            queue: VecDeque::new(),
            detector: None,
            rng: DroneRng::new(global_seed, id),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The drone's current cell, read through the grid registry.
    pub fn position(&self, grid: &Grid) -> Option<Position> {
        grid.position_of(self.entity)
    }

    pub fn behavior(&self) -> Option<&Behavior> {
        self.behavior.as_ref()
    }

    pub fn detector(&self) -> Option<&Detector> {
        self.detector.as_ref()
    }

    /// Current action plus everything pending behind it.
    pub fn queued_actions(&self) -> usize {
        self.queue.len() + usize::from(self.current_action.is_some())
    }

    pub fn mode(&self) -> DroneMode {
        if self.behavior.is_some() {
            DroneMode::Behavior
        } else if self.current_action.is_some() {
            DroneMode::Queue
        } else {
            DroneMode::Idle
        }
    }

    pub fn rng_mut(&mut self) -> &mut DroneRng {
        &mut self.rng
    }

    // ── Configuration ─────────────────────────────────────────────────────

    pub fn set_detector(&mut self, detector: Detector) {
        self.detector = Some(detector);
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Run one tick: behavior if active, else one queued action, then the
    /// detector.  The behavior is taken out of its slot for the duration of
    /// its `update` so it can mutate the drone it belongs to.
    pub fn update(&mut self, grid: &mut Grid) {
        if let Some(mut behavior) = self.behavior.take() {
            behavior.update(self, grid);
            self.behavior = Some(behavior);
        } else if let Some(action) = self.current_action.as_mut() {
            if action.execute(self.id, self.entity, grid) {
                // FIFO advance: the next action starts on the next tick.
                self.current_action = self.queue.pop_front();
            }
        }

        if let Some(detector) = &self.detector {
            detector.check(self.id, self.entity, grid);
        }
    }

    // ── Plan mutation ─────────────────────────────────────────────────────

    /// Enqueue an action.  Queue-driven and behavior-driven modes are
    /// mutually exclusive, so an active behavior is stopped first.
    pub fn add_action(&mut self, action: Action) {
        if self.behavior.is_some() {
            self.clear_behavior();
        }
        if self.current_action.is_none() {
            self.current_action = Some(action);
        } else {
            self.queue.push_back(action);
        }
    }

    /// Drop the current action and every pending one.
    pub fn clear_actions(&mut self) {
        self.current_action = None;
        self.queue.clear();
    }

    /// Replace the active behavior.  Atomically clears the action queue and
    /// stops any prior behavior, then starts the new one (which may plan a
    /// path from the drone's current position).
    pub fn set_behavior(&mut self, mut behavior: Behavior, grid: &Grid) {
        self.clear_actions();
        if let Some(mut old) = self.behavior.take() {
            old.stop(self);
        }
        behavior.start(self, grid);
        self.behavior = Some(behavior);
    }

    /// Stop and drop the active behavior, leaving the drone idle.
    pub fn clear_behavior(&mut self) {
        if let Some(mut old) = self.behavior.take() {
            old.stop(self);
        }
    }

    // ── Command application ───────────────────────────────────────────────

    /// Apply one routed command.  The caller (the simulation driver) has
    /// already matched `command.drone()` to this drone.
    pub fn apply(&mut self, command: DroneCommand, grid: &Grid) {
        match command {
            DroneCommand::SetBehavior { plan, .. } => {
                self.set_behavior(Behavior::from_plan(&plan), grid);
            }
            DroneCommand::ClearBehavior { .. } => self.clear_behavior(),
            DroneCommand::PushAction { request, .. } => {
                self.add_action(Action::from_request(request));
            }
            DroneCommand::ClearActions { .. } => self.clear_actions(),
        }
    }
}
