//! `swarm-agent` — the behavior/action execution engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`action`]   | `Action` — Move / Wait / Scan primitives                |
//! | [`behavior`] | `Behavior` — MoveTo / Explore / Patrol / Search plans   |
//! | [`detector`] | `Detector` — passive per-tick target sensing            |
//! | [`drone`]    | `Drone` — per-tick orchestrator, queue, lifecycle       |
//!
//! # Tick anatomy
//!
//! One call to [`Drone::update`] does, in order:
//!
//! 1. If a behavior is active, delegate the whole tick to it.  The
//!    behavior executes at most one action and advances its own plan.
//! 2. Otherwise execute the current queued action, advancing the FIFO
//!    when it completes.
//! 3. Always run the detector, if one is attached.
//!
//! Actions and behaviors are closed enums with one dispatch function per
//! lifecycle operation — no open-ended trait objects, so every call site
//! gets exhaustive-match safety.

pub mod action;
pub mod behavior;
pub mod detector;
pub mod drone;


pub use action::Action;
pub use behavior::Behavior;
pub use detector::Detector;
pub use drone::{Drone, DroneMode};
