//! `swarm-core` — foundational types for the drone swarm simulation.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It
//! intentionally has no `swarm-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`ids`]   | `DroneId`, `EntityId`                                 |
//! | [`geom`]  | `Position`, `Direction`, grid distances               |
//! | [`tick`]  | `Tick` — the discrete simulation time unit            |
//! | [`plan`]  | `BehaviorPlan`, `ActionRequest` — plain-data plans    |
//! | [`rng`]   | `DroneRng` (per-drone), `SwarmRng` (global)           |
//! | [`error`] | `SwarmError`, `SwarmResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod geom;
pub mod ids;
pub mod plan;
pub mod rng;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SwarmError, SwarmResult};
pub use geom::{Direction, Position};
pub use ids::{DroneId, EntityId};
pub use plan::{ActionRequest, BehaviorPlan};
pub use rng::{DroneRng, SwarmRng};
pub use tick::Tick;
