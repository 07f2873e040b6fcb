//! Primitive actions: the one-tick-granularity operations a drone performs.
//!
//! State machine per action: `pending → completed`, terminal.  `execute`
//! is idempotent after completion — repeat calls return `true` without
//! touching the grid.  A blocked move is not an error: the action completes
//! (movement is single-attempt, never retried) and a distinct event fires.

use swarm_core::{ActionRequest, Direction, DroneId, EntityId};
use swarm_events::{EventData, Value, topics};
use swarm_grid::Grid;

/// A primitive action with its completion flag.
#[derive(Clone, Debug)]
pub struct Action {
    kind: Kind,
    completed: bool,
}

#[derive(Clone, Debug)]
enum Kind {
    Move { direction: Direction },
    Wait { ticks: u32, elapsed: u32 },
    Scan { radius: u32 },
}

impl Action {
    /// One single-attempt move in `direction`.
    pub fn move_in(direction: Direction) -> Self {
        Self { kind: Kind::Move { direction }, completed: false }
    }

    /// Idle for `ticks` updates.  `Wait(0)` completes on its first execution.
    pub fn wait(ticks: u32) -> Self {
        Self { kind: Kind::Wait { ticks, elapsed: 0 }, completed: false }
    }

    /// Instantaneous Chebyshev-square scan of the given radius.
    pub fn scan(radius: u32) -> Self {
        Self { kind: Kind::Scan { radius }, completed: false }
    }

    pub fn from_request(request: ActionRequest) -> Self {
        match request {
            ActionRequest::Move(direction) => Action::move_in(direction),
            ActionRequest::Wait(ticks) => Action::wait(ticks),
            ActionRequest::Scan(radius) => Action::scan(radius),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// `true` for `Move` — Search uses this to count only move completions.
    pub fn is_move(&self) -> bool {
        matches!(self.kind, Kind::Move { .. })
    }

    /// Return the action to its pending state (Wait restarts its counter).
    pub fn reset(&mut self) {
        self.completed = false;
        if let Kind::Wait { elapsed, .. } = &mut self.kind {
            *elapsed = 0;
        }
    }

    /// Run one tick of this action for `drone` / `entity` on `grid`.
    /// Returns `true` iff the action is (now) completed.
    pub fn execute(&mut self, drone: DroneId, entity: EntityId, grid: &mut Grid) -> bool {
        if self.completed {
            return true;
        }

        match &mut self.kind {
            // ── Move: single attempt, commits or fires movement_blocked ───
            Kind::Move { direction } => {
                let direction = *direction;
                self.completed = true;

                let Some(from) = grid.position_of(entity) else {
                    // Unregistered entity: nothing to move.  Complete as a
                    // no-op so the queue keeps draining.
                    tracing::warn!(%drone, %entity, "move: entity not in registry");
                    return true;
                };

                let to = from.step(direction);
                if grid.is_valid_position(to) {
                    grid.move_entity(entity, to);
                    grid.trigger(
                        topics::DRONE_MOVED,
                        payload(drone, "position", Value::Position(to)),
                    );
                } else {
                    grid.trigger(
                        topics::MOVEMENT_BLOCKED,
                        payload(drone, "direction", Value::Direction(direction)),
                    );
                }
                true
            }

            // ── Wait: counts ticks ─────────────────────────────────────────
            Kind::Wait { ticks, elapsed } => {
                *elapsed += 1;
                if *elapsed >= *ticks {
                    self.completed = true;
                }
                self.completed
            }

            // ── Scan: instantaneous Chebyshev-square query ────────────────
            Kind::Scan { radius } => {
                let radius = *radius as i32;
                self.completed = true;

                let Some(center) = grid.position_of(entity) else {
                    tracing::warn!(%drone, %entity, "scan: entity not in registry");
                    return true;
                };

                // Includes the scanning drone itself; handlers filter.
                let mut found = Vec::new();
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let cell = center.offset(dx, dy);
                        if grid.is_valid_position(cell) {
                            found.extend(grid.entities_at(cell).map(|e| e.id));
                        }
                    }
                }

                grid.trigger(
                    topics::SCAN_COMPLETED,
                    payload(drone, "entities", Value::Entities(found)),
                );
                true
            }
        }
    }
}

/// Two-entry payload every action event carries: the acting drone plus one
/// event-specific value.
fn payload(drone: DroneId, key: &str, value: Value) -> EventData {
    let mut data = EventData::default();
    data.insert("drone".to_owned(), Value::Drone(drone));
    data.insert(key.to_owned(), value);
    data
}
