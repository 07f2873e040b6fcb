//! Reaction commands: how event handlers mutate drones.
//!
//! Handlers run while the triggering drone is mid-update, so they cannot
//! take `&mut Drone` themselves.  Instead they push `DroneCommand`s into
//! the `Reactions` buffer; the simulation driver drains the buffer right
//! after the triggering drone's update returns and applies each command to
//! its addressee — still within the same tick.

use swarm_core::{ActionRequest, BehaviorPlan, DroneId};

/// A deferred mutation of one drone, produced by an event handler.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DroneCommand {
    /// Replace the drone's behavior (clears its action queue first).
    SetBehavior { drone: DroneId, plan: BehaviorPlan },
    /// Stop and drop the drone's behavior, leaving it idle or queue-driven.
    ClearBehavior { drone: DroneId },
    /// Append one action to the drone's FIFO queue.
    PushAction { drone: DroneId, request: ActionRequest },
    /// Drop the current action and every pending one.
    ClearActions { drone: DroneId },
}

impl DroneCommand {
    /// The drone this command addresses.
    pub fn drone(&self) -> DroneId {
        match self {
            DroneCommand::SetBehavior { drone, .. }
            | DroneCommand::ClearBehavior { drone }
            | DroneCommand::PushAction { drone, .. }
            | DroneCommand::ClearActions { drone } => *drone,
        }
    }
}

/// An ordered buffer of pending [`DroneCommand`]s.
///
/// Commands apply in push order; a `SetBehavior` pushed after three
/// `PushAction`s still wins, because applying it clears the queue.
#[derive(Default)]
pub struct Reactions {
    commands: Vec<DroneCommand>,
}

impl Reactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DroneCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take every pending command, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<DroneCommand> {
        std::mem::take(&mut self.commands)
    }
}
