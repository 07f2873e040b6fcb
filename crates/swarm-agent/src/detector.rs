//! Passive per-tick target sensing.

use swarm_core::{DroneId, EntityId};
use swarm_events::{EventData, Value, topics};
use swarm_grid::Grid;

/// A detector attached to a drone.  Stateless across ticks: each `check`
/// scans the Chebyshev square of side `2·range+1` around the drone, keeps
/// entities of kind `Target` that are not the drone itself, and fires
/// `target_detected{drone, targets}` if any remain.
///
/// The detector never mutates the drone.  Reacting to a detection —
/// typically replacing the drone's behavior — is the job of an external
/// subscriber to the event, which runs synchronously within the same tick.
#[derive(Copy, Clone, Debug)]
pub struct Detector {
    range: u32,
}

impl Detector {
    pub fn new(range: u32) -> Self {
        Self { range }
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    /// Scan around `entity` and report any targets found.
    pub fn check(&self, drone: DroneId, entity: EntityId, grid: &mut Grid) -> Vec<EntityId> {
        let Some(center) = grid.position_of(entity) else {
            return Vec::new();
        };

        let range = self.range as i32;
        let mut targets = Vec::new();
        for dy in -range..=range {
            for dx in -range..=range {
                let cell = center.offset(dx, dy);
                if !grid.is_valid_position(cell) {
                    continue;
                }
                targets.extend(
                    grid.entities_at(cell)
                        .filter(|e| e.is_target() && e.id != entity)
                        .map(|e| e.id),
                );
            }
        }

        if !targets.is_empty() {
            let mut data = EventData::default();
            data.insert("drone".to_owned(), Value::Drone(drone));
            data.insert("targets".to_owned(), Value::Entities(targets.clone()));
            grid.trigger(topics::TARGET_DETECTED, data);
        }

        targets
    }
}
