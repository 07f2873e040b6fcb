//! The grid: bounds checking, the O(n) entity registry, and the event bus.

use tracing::debug;

use swarm_core::{EntityId, Position};
use swarm_events::{DroneCommand, Event, EventBus, EventData, Reactions};

use crate::{Entity, EntityKind};

/// A bounded rectangular grid holding the entity registry and the
/// simulation's event bus.
///
/// The registry is a flat `Vec` scanned linearly by [`entities_at`]
/// — O(n) in entity count, which is fine at simulation scale (tens of
/// entities, thousands of ticks).  No duplicate detection beyond identity:
/// two entities may share a cell.
///
/// [`entities_at`]: Grid::entities_at
pub struct Grid {
    width: i32,
    height: i32,
    entities: Vec<Entity>,
    next_entity: u32,
    bus: EventBus,
    reactions: Reactions,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            entities: Vec::new(),
            next_entity: 0,
            bus: EventBus::new(),
            reactions: Reactions::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    // ── Bounds ────────────────────────────────────────────────────────────

    /// `true` iff `0 <= x < width` and `0 <= y < height`.  Out-of-range
    /// queries are not errors; they are simply false.
    #[inline]
    pub fn is_valid_position(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    // ── Registry ──────────────────────────────────────────────────────────

    /// Register a new entity and return its handle.  Positions are not
    /// validated here; spawning off-grid is the caller's mistake to make.
    pub fn add_entity(&mut self, kind: EntityKind, position: Position) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        self.entities.push(Entity { id, kind, position });
        id
    }

    /// Deregister by identity.  Returns `false` (and logs) when the handle
    /// is unknown — removal of a missing entity is not an error.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e.id != id);
        let removed = self.entities.len() < before;
        if !removed {
            debug!(%id, "remove_entity: no such entity");
        }
        removed
    }

    /// All entities whose position equals `position`, in registration
    /// order.  Unordered semantically; O(n) scan.
    pub fn entities_at(&self, position: Position) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter().filter(move |e| e.position == position)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        self.entity(id).map(|e| e.position)
    }

    /// Commit a position change.  Returns `false` when the handle is
    /// unknown.  Bounds are the caller's contract: movement code validates
    /// with [`is_valid_position`][Grid::is_valid_position] before committing.
    pub fn move_entity(&mut self, id: EntityId, position: Position) -> bool {
        match self.entities.iter_mut().find(|e| e.id == id) {
            Some(entity) => {
                entity.position = position;
                true
            }
            None => false,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Subscribe a handler to `name`.  See `swarm-events` for the dispatch
    /// and reaction contract.
    pub fn subscribe<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&Event, &mut Reactions) + 'static,
    {
        self.bus.subscribe(name, handler);
    }

    /// Fire `name` with `data` at every subscriber, synchronously, in
    /// subscription order.  Commands the handlers push accumulate in the
    /// grid's reaction buffer until the driver collects them with
    /// [`take_commands`][Grid::take_commands].
    pub fn trigger(&mut self, name: &str, data: EventData) {
        let event = Event { name: name.to_owned(), data };
        self.bus.trigger(&event, &mut self.reactions);
    }

    /// Drain every pending handler command, in push order.
    pub fn take_commands(&mut self) -> Vec<DroneCommand> {
        self.reactions.drain()
    }

    /// `true` if any handler command is waiting to be applied.
    pub fn has_pending_commands(&self) -> bool {
        !self.reactions.is_empty()
    }

    /// Remove every event subscription.
    pub fn clear_subscriptions(&mut self) {
        self.bus.clear();
    }
}
