//! Observation hooks for the tick loop.

use swarm_agent::Drone;
use swarm_core::Tick;
use swarm_grid::Grid;

/// Callbacks around each tick of a [`run`][crate::Simulation::run].  All
/// methods default to no-ops so observers implement only what they watch.
pub trait SimObserver {
    fn on_tick_start(&mut self, _tick: Tick) {}
    fn on_tick_end(&mut self, _tick: Tick, _drones: &[Drone], _grid: &Grid) {}
    fn on_run_end(&mut self, _tick: Tick) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
