//! Compile schema-checked commands into routed drone commands.
//!
//! Compilation is where roster and parameter validation happens, and it is
//! atomic per command: every target and every parameter of one command is
//! checked before any [`DroneCommand`] for it is emitted, so a bad command
//! contributes nothing.  Commands within a batch are independent — one
//! rejection does not poison its neighbors.

use tracing::warn;

use swarm_core::{ActionRequest, BehaviorPlan, Direction, DroneId, Position};
use swarm_events::DroneCommand;

use crate::envelope::{BehaviorCommand, LegacyMoveCommand, RawCommand};
use crate::{CommandError, CommandResult};

/// Result of compiling one batch: the commands to queue plus the per-command
/// rejections, each already logged.
#[derive(Debug, Default)]
pub struct CompiledBatch {
    pub commands: Vec<DroneCommand>,
    pub rejected: Vec<CommandError>,
}

impl CompiledBatch {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.rejected.is_empty()
    }
}

/// Compile a batch of parsed commands against the current drone roster.
pub fn compile(raw: Vec<RawCommand>, roster: &[DroneId]) -> CompiledBatch {
    let mut batch = CompiledBatch::default();
    for command in raw {
        let result = match command {
            RawCommand::Behavior(cmd) => compile_behavior(cmd, roster, &mut batch.commands),
            RawCommand::Legacy(cmd) => compile_legacy(cmd, roster, &mut batch.commands),
        };
        if let Err(error) = result {
            warn!(%error, "command rejected");
            batch.rejected.push(error);
        }
    }
    batch
}

fn compile_behavior(
    cmd: BehaviorCommand,
    roster: &[DroneId],
    out: &mut Vec<DroneCommand>,
) -> CommandResult<()> {
    let plan = plan_from(&cmd.behavior_type, &cmd.parameters)?;
    let mut drones = Vec::with_capacity(cmd.targets.len());
    for target in &cmd.targets {
        drones.push(resolve(target.drone_id, roster)?);
    }
    for drone in drones {
        out.push(DroneCommand::SetBehavior { drone, plan: plan.clone() });
    }
    Ok(())
}

fn compile_legacy(
    cmd: LegacyMoveCommand,
    roster: &[DroneId],
    out: &mut Vec<DroneCommand>,
) -> CommandResult<()> {
    if cmd.command_type != "move" {
        return Err(CommandError::UnknownCommandType(cmd.command_type));
    }
    let drone = resolve(cmd.target.drone_id, roster)?;

    // Validate every movement before emitting anything.
    let mut steps = Vec::new();
    for movement in &cmd.parameters.movements {
        let direction: Direction = movement
            .direction
            .parse()
            .map_err(|_| CommandError::Direction(movement.direction.clone()))?;
        if !matches!(
            direction,
            Direction::Up | Direction::Down | Direction::Left | Direction::Right
        ) {
            return Err(CommandError::Direction(movement.direction.clone()));
        }
        steps.push((direction, movement.steps));
    }

    out.push(DroneCommand::ClearBehavior { drone });
    out.push(DroneCommand::ClearActions { drone });
    for (direction, count) in steps {
        for _ in 0..count {
            out.push(DroneCommand::PushAction {
                drone,
                request: ActionRequest::Move(direction),
            });
        }
    }
    Ok(())
}

/// Build a behavior plan from its wire name and parameter object.  Missing
/// optional parameters take the documented defaults; missing required ones
/// reject the command.
pub fn plan_from(behavior_type: &str, params: &serde_json::Value) -> CommandResult<BehaviorPlan> {
    match behavior_type {
        "move_to" => Ok(BehaviorPlan::MoveTo {
            target: position_param(params)?,
        }),
        "explore" => Ok(BehaviorPlan::Explore {
            steps: int_param(params, "steps").unwrap_or(-1),
        }),
        "patrol" => {
            let waypoints = match params.get("waypoints") {
                None | Some(serde_json::Value::Null) => Vec::new(),
                Some(serde_json::Value::Array(items)) => {
                    let mut waypoints = Vec::with_capacity(items.len());
                    for item in items {
                        waypoints.push(position_param(item)?);
                    }
                    waypoints
                }
                Some(_) => return Err(CommandError::Parameter("waypoints")),
            };
            Ok(BehaviorPlan::Patrol {
                waypoints,
                loops: int_param(params, "loops").unwrap_or(-1),
            })
        }
        "search" => Ok(BehaviorPlan::Search {
            steps_between_scans: uint_param(params, "steps_between_scans").unwrap_or(1),
            scan_range: uint_param(params, "scan_range").unwrap_or(1),
            max_steps: int_param(params, "max_steps").unwrap_or(-1),
        }),
        other => Err(CommandError::UnknownBehavior(other.to_owned())),
    }
}

fn resolve(drone_id: u32, roster: &[DroneId]) -> CommandResult<DroneId> {
    let id = DroneId(drone_id);
    if roster.contains(&id) {
        Ok(id)
    } else {
        Err(CommandError::DroneNotFound(drone_id))
    }
}

fn position_param(params: &serde_json::Value) -> CommandResult<Position> {
    let x = int_param(params, "x").ok_or(CommandError::Parameter("x"))?;
    let y = int_param(params, "y").ok_or(CommandError::Parameter("y"))?;
    Ok(Position::new(x, y))
}

fn int_param(params: &serde_json::Value, key: &str) -> Option<i32> {
    params.get(key)?.as_i64()?.try_into().ok()
}

fn uint_param(params: &serde_json::Value, key: &str) -> Option<u32> {
    params.get(key)?.as_u64()?.try_into().ok()
}
