//! Deterministic per-drone and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each drone gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (drone_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive drone IDs uniformly across the seed space.
//! This means:
//!
//! - Drones never share RNG state, so random-walk behaviors (Explore,
//!   Search) are reproducible per drone regardless of update order.
//! - Adding or removing drones at the end of the roster does not disturb
//!   the seeds of existing drones.
//! - Tests can assert exact trajectories by fixing the global seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::DroneId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── DroneRng ──────────────────────────────────────────────────────────────────

/// Per-drone deterministic RNG.
///
/// Create one per drone at spawn time; the drone owns it and hands it to
/// its behaviors on every update, which is what makes random movement an
/// injected dependency rather than ambient global state.
pub struct DroneRng(SmallRng);

impl DroneRng {
    /// Seed deterministically from the run's global seed and a drone ID.
    pub fn new(global_seed: u64, drone: DroneId) -> Self {
        let seed = global_seed ^ (drone.0 as u64).wrapping_mul(MIXING_CONSTANT);
        DroneRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SwarmRng ──────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (entity placement, demo
/// handlers, exogenous events).
pub struct SwarmRng(SmallRng);

impl SwarmRng {
    pub fn new(seed: u64) -> Self {
        SwarmRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SwarmRng` with a different seed offset — useful for
    /// giving an event handler its own stream without disturbing spawn
    /// placement.
    pub fn child(&mut self, offset: u64) -> SwarmRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SwarmRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
