//! `swarm-grid` — the simulation surface: bounds checking, the entity
//! registry, and the event bus drones fire into.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`entity`] | `Entity`, `EntityKind`                            |
//! | [`grid`]   | `Grid` — bounds + registry + event bus + reactions |
//!
//! Every entity's position lives in the registry; drones read and write
//! theirs through [`Grid::position_of`] / [`Grid::move_entity`] rather than
//! holding their own copy, so there is exactly one source of truth for
//! spatial queries.

pub mod entity;
pub mod grid;


pub use entity::{Entity, EntityKind};
pub use grid::Grid;
