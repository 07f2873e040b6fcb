//! Run configuration.

/// Parameters for building a populated simulation.  Spawn positions are
/// drawn from a `SwarmRng` seeded with `seed`, so a config fully determines
/// the run.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub drones: u32,
    pub targets: u32,
    pub detection_range: u32,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            drones: 3,
            targets: 3,
            detection_range: 2,
            seed: 0,
        }
    }
}
