//! Entities: anything with a registry identity and a grid position.

use std::fmt;

use swarm_core::{EntityId, Position};

/// What an entity is, as far as sensing is concerned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Drone,
    Target,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Drone => "drone",
            EntityKind::Target => "target",
        })
    }
}

/// A registered entity.  Created on spawn, removed on explicit
/// deregistration; identity equality is by `id` only.
#[derive(Copy, Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
}

impl Entity {
    pub fn is_target(&self) -> bool {
        self.kind == EntityKind::Target
    }
}
