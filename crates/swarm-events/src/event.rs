//! Events: a name tag plus an unordered key → value payload.
//!
//! Events are ephemeral — built for one `trigger` call and dropped when it
//! returns.  Payload values are a closed enum over the kinds the core
//! actually emits, so handlers can match without downcasting.

use rustc_hash::FxHashMap;

use swarm_core::{Direction, DroneId, EntityId, Position};

/// Names of the events the core fires.
pub mod topics {
    /// `{drone, position}` — a move committed to a new cell.
    pub const DRONE_MOVED: &str = "drone_moved";
    /// `{drone, direction}` — a move attempt landed off-grid.
    pub const MOVEMENT_BLOCKED: &str = "movement_blocked";
    /// `{drone, entities}` — a scan finished; includes the scanner itself.
    pub const SCAN_COMPLETED: &str = "scan_completed";
    /// `{drone, targets}` — a detector saw targets in range.
    pub const TARGET_DETECTED: &str = "target_detected";
}

/// A payload value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    Drone(DroneId),
    Entity(EntityId),
    Position(Position),
    Direction(Direction),
    Entities(Vec<EntityId>),
    Text(String),
}

impl Value {
    pub fn as_drone(&self) -> Option<DroneId> {
        match self {
            Value::Drone(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<EntityId> {
        match self {
            Value::Entity(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_position(&self) -> Option<Position> {
        match self {
            Value::Position(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_direction(&self) -> Option<Direction> {
        match self {
            Value::Direction(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_entities(&self) -> Option<&[EntityId]> {
        match self {
            Value::Entities(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Unordered event payload.
pub type EventData = FxHashMap<String, Value>;

/// A named event with its payload.  Exists only for the duration of one
/// `trigger` call.
#[derive(Clone, Debug)]
pub struct Event {
    pub name: String,
    pub data: EventData,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: EventData::default(),
        }
    }

    /// Builder-style payload insertion.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The `drone` payload entry, present on every core-fired event.
    pub fn drone(&self) -> Option<DroneId> {
        self.get("drone").and_then(Value::as_drone)
    }
}
