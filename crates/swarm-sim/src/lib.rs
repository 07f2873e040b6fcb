//! `swarm-sim` — the simulation driver.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`config`]   | `SimConfig` — grid size, roster, detection, seed     |
//! | [`sim`]      | `Simulation` — tick loop, spawning, command routing  |
//! | [`observer`] | `SimObserver` hooks plus `NoopObserver`              |
//!
//! The driver is single-threaded and cooperative: one external caller
//! advances the clock tick by tick, and every mutation is synchronous and
//! visible to later drones within the same tick.

pub mod config;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{GoalStatus, Simulation};
