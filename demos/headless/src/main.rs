//! Headless swarm run: drones explore a grid, detectors spot targets, and a
//! reaction handler pauses each finder before it wanders off again.
//!
//! ```text
//! cargo run -p headless -- --num-drones 3 --num-targets 3 --seed 42 --ticks 200
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swarm_agent::DroneMode;
use swarm_command::{MockTranslator, RuleTranslator, Translator};
use swarm_core::{ActionRequest, BehaviorPlan, Direction, SwarmRng};
use swarm_events::{topics, DroneCommand};
use swarm_sim::{GoalStatus, SimConfig, Simulation};

#[derive(Parser)]
#[command(about = "Run the drone swarm simulation without a display")]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Grid height in cells.
    #[arg(long, default_value_t = 15)]
    height: i32,

    #[arg(long = "num-drones", default_value_t = 3)]
    drones: u32,

    #[arg(long = "num-targets", default_value_t = 3)]
    targets: u32,

    /// Chebyshev detection range of each drone's sensor.
    #[arg(long = "detection-range", default_value_t = 2)]
    detection_range: u32,

    /// Seed for spawn placement and random walks.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How many ticks to run.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Use the canned translator instead of the rule-based text parser.
    #[arg(long)]
    mock: bool,

    /// Goal submitted before the run starts.
    #[arg(long, default_value = "Search for and find all targets in the environment")]
    goal: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = SimConfig {
        width: args.width,
        height: args.height,
        drones: args.drones,
        targets: args.targets,
        detection_range: args.detection_range,
        seed: args.seed,
    };
    let mut sim = Simulation::from_config(config)?;

    // On detection: pause for effect, shuffle away, then go idle (the main
    // loop below re-arms idle drones with Explore).
    let detections = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&detections);
    let mut reaction_rng = SwarmRng::new(args.seed).child(1);
    sim.grid_mut().subscribe(topics::TARGET_DETECTED, move |event, reactions| {
        let Some(drone) = event.drone() else { return };
        *counter.borrow_mut() += 1;
        info!(drone = %drone, "target detected, breaking off");
        reactions.push(DroneCommand::ClearBehavior { drone });
        reactions.push(DroneCommand::PushAction { drone, request: ActionRequest::Wait(5) });
        for _ in 0..3 {
            let direction = reaction_rng
                .choose(&Direction::CARDINAL)
                .copied()
                .unwrap_or(Direction::Stay);
            reactions.push(DroneCommand::PushAction {
                drone,
                request: ActionRequest::Move(direction),
            });
        }
    });

    let status = if args.mock {
        sim.submit_goal(&args.goal, &mut MockTranslator)
    } else {
        sim.submit_goal(&args.goal, &mut RuleTranslator::default())
    };
    match status {
        GoalStatus::Accepted { queued, rejected } => {
            info!(queued, rejected, "goal accepted")
        }
        GoalStatus::Rejected(reason) => info!(%reason, "goal refused, exploring instead"),
        GoalStatus::Failed(reason) => info!(%reason, "translation failed, exploring instead"),
    }

    // Everyone without marching orders explores; re-armed whenever a
    // reaction queue drains back to idle.
    for _ in 0..args.ticks {
        let explore: Vec<_> = sim
            .drones()
            .iter()
            .filter(|d| d.mode() == DroneMode::Idle)
            .map(|d| DroneCommand::SetBehavior {
                drone: d.id,
                plan: BehaviorPlan::Explore { steps: -1 },
            })
            .collect();
        sim.queue_commands(explore);
        sim.step();
    }

    println!("after {} ticks, {} detection event(s):", sim.tick(), detections.borrow());
    for drone in sim.drones() {
        let position = drone
            .position(sim.grid())
            .map_or_else(|| "off-grid".to_owned(), |p| p.to_string());
        let mode = match drone.mode() {
            DroneMode::Behavior => drone.behavior().map_or("behavior", |b| b.kind_name()),
            DroneMode::Queue => "queued actions",
            DroneMode::Idle => "idle",
        };
        println!("  drone {:>2}  {:>10}  {}", drone.id.0, position, mode);
    }
    Ok(())
}
