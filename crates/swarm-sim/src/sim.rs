//! The simulation driver: owns the grid and the drone roster, advances
//! ticks, and routes commands.
//!
//! # Tick contract
//!
//! One [`step`][Simulation::step] advances the clock and then:
//!
//! 1. Applies the pending command batch, whole, before any drone updates —
//!    translation output never interleaves with an in-progress tick.
//! 2. Updates each drone in registration order.  Each update runs to
//!    completion; any commands its events produced are applied immediately
//!    after it returns, still within the same tick, so the next drone sees
//!    their effect.

use tracing::{debug, info, warn};

use swarm_agent::{Detector, Drone};
use swarm_command::{compile, parse_text, Envelope, Translator};
use swarm_core::{DroneId, EntityId, Position, SwarmRng, Tick};
use swarm_events::DroneCommand;
use swarm_grid::{EntityKind, Grid};

use crate::{SimConfig, SimError, SimObserver, SimResult};

/// Outcome of submitting a goal to a translator.
#[derive(Debug)]
pub enum GoalStatus {
    /// Commands were compiled and queued for the next tick boundary.
    Accepted { queued: usize, rejected: usize },
    /// The translator understood the goal but refused it.
    Rejected(String),
    /// The translator itself failed; nothing was queued.
    Failed(String),
}

pub struct Simulation {
    grid: Grid,
    drones: Vec<Drone>,
    tick: Tick,
    pending: Vec<DroneCommand>,
    seed: u64,
}

impl Simulation {
    /// An empty simulation on a `width` x `height` grid.
    pub fn new(width: i32, height: i32, seed: u64) -> SimResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SimError::Config(format!(
                "grid must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            grid: Grid::new(width, height),
            drones: Vec::new(),
            tick: Tick::ZERO,
            pending: Vec::new(),
            seed,
        })
    }

    /// A populated simulation: drones with detectors plus targets, placed
    /// uniformly at random by the config's seed.
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        let mut sim = Self::new(config.width, config.height, config.seed)?;
        let mut rng = SwarmRng::new(config.seed);
        let random_cell = |rng: &mut SwarmRng| {
            Position::new(rng.gen_range(0..config.width), rng.gen_range(0..config.height))
        };

        for _ in 0..config.drones {
            let position = random_cell(&mut rng);
            let id = sim.spawn_drone(position);
            sim.attach_detector(id, config.detection_range)?;
        }
        for _ in 0..config.targets {
            let position = random_cell(&mut rng);
            sim.spawn_target(position);
        }
        info!(
            width = config.width,
            height = config.height,
            drones = config.drones,
            targets = config.targets,
            seed = config.seed,
            "simulation built"
        );
        Ok(sim)
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Register a new drone at `position`.  Drone numbers are 1-based and
    /// assigned in spawn order.
    pub fn spawn_drone(&mut self, position: Position) -> DroneId {
        let id = DroneId(self.drones.len() as u32 + 1);
        let entity = self.grid.add_entity(EntityKind::Drone, position);
        self.drones.push(Drone::new(id, entity, self.seed));
        debug!(drone = %id, %position, "drone spawned");
        id
    }

    pub fn spawn_target(&mut self, position: Position) -> EntityId {
        self.grid.add_entity(EntityKind::Target, position)
    }

    pub fn attach_detector(&mut self, id: DroneId, range: u32) -> SimResult<()> {
        self.drone_mut(id)
            .ok_or(SimError::DroneNotFound(id))?
            .set_detector(Detector::new(range));
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, mainly for subscribing event handlers.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn drone(&self, id: DroneId) -> Option<&Drone> {
        self.drones.iter().find(|d| d.id == id)
    }

    pub fn drone_mut(&mut self, id: DroneId) -> Option<&mut Drone> {
        self.drones.iter_mut().find(|d| d.id == id)
    }

    /// Drone numbers in spawn order, as the command layer expects them.
    pub fn roster(&self) -> Vec<DroneId> {
        self.drones.iter().map(|d| d.id).collect()
    }

    // ── Command intake ────────────────────────────────────────────────────

    /// Queue routed commands for the next tick boundary.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = DroneCommand>) {
        self.pending.extend(commands);
    }

    /// Translate a free-form goal and queue whatever compiles.  Translator
    /// failures and refusals are surfaced in the status; the tick loop is
    /// unaffected either way.
    pub fn submit_goal(&mut self, goal: &str, translator: &mut dyn Translator) -> GoalStatus {
        let roster = self.roster();
        let envelope = match translator.translate(goal, &roster) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(%error, goal, "translation failed");
                return GoalStatus::Failed(error.to_string());
            }
        };
        match envelope {
            Envelope::Error(reason) => {
                warn!(%reason, goal, "goal refused");
                GoalStatus::Rejected(reason)
            }
            Envelope::Commands(raw) => {
                let batch = compile(raw, &roster);
                let queued = batch.commands.len();
                let rejected = batch.rejected.len();
                info!(goal, queued, rejected, "goal accepted");
                self.pending.extend(batch.commands);
                GoalStatus::Accepted { queued, rejected }
            }
        }
    }

    /// Parse and queue one text command.  Rejection queues nothing.
    pub fn submit_text(&mut self, text: &str) -> SimResult<usize> {
        let command = parse_text(text)?;
        let batch = compile(vec![command.into_raw()], &self.roster());
        if let Some(error) = batch.rejected.into_iter().next() {
            return Err(error.into());
        }
        let queued = batch.commands.len();
        self.pending.extend(batch.commands);
        Ok(queued)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        self.tick = self.tick + 1;

        if !self.pending.is_empty() {
            let batch = std::mem::take(&mut self.pending);
            debug!(tick = %self.tick, count = batch.len(), "applying command batch");
            for command in batch {
                self.apply_command(command);
            }
        }

        for i in 0..self.drones.len() {
            self.drones[i].update(&mut self.grid);
            // Reactions from this drone's events apply before the next
            // drone updates.
            if self.grid.has_pending_commands() {
                for command in self.grid.take_commands() {
                    self.apply_command(command);
                }
            }
        }
    }

    /// Run `ticks` steps, reporting each to `observer`.
    pub fn run<O: SimObserver>(&mut self, ticks: u64, observer: &mut O) {
        for _ in 0..ticks {
            observer.on_tick_start(self.tick + 1);
            self.step();
            observer.on_tick_end(self.tick, &self.drones, &self.grid);
        }
        observer.on_run_end(self.tick);
    }

    fn apply_command(&mut self, command: DroneCommand) {
        let id = command.drone();
        match self.drones.iter_mut().find(|d| d.id == id) {
            Some(drone) => drone.apply(command, &self.grid),
            None => warn!(drone = %id, "command for unknown drone dropped"),
        }
    }
}
