//! Wire formats for operator commands.
//!
//! A translation response is one of three JSON shapes: a single command
//! object, an array of command objects (each applied independently), or an
//! `{"error": "..."}` refusal.  Command objects come in two schemas: the
//! behavior schema (`behavior_type` + `targets` + `parameters`) and the
//! legacy move-only schema (`command_type` + single `target`).

use serde::Deserialize;

use crate::{CommandError, CommandResult};

/// A parsed translation response, schema-checked but not yet validated
/// against a drone roster.
#[derive(Debug)]
pub enum Envelope {
    /// The translator refused the goal with a reason.
    Error(String),
    /// Zero or more commands to compile independently.
    Commands(Vec<RawCommand>),
}

/// One command object, in either accepted schema.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawCommand {
    Behavior(BehaviorCommand),
    Legacy(LegacyMoveCommand),
}

/// `{"behavior_type": ..., "targets": [...], "parameters": {...}}`
#[derive(Deserialize, Debug)]
pub struct BehaviorCommand {
    pub behavior_type: String,
    #[serde(default)]
    pub targets: Vec<TargetRef>,
    #[serde(default)]
    pub parameters: serde_json::Value,
}

/// `{"command_type": "move", "target": {...}, "parameters": {"movements": [...]}}`
#[derive(Deserialize, Debug)]
pub struct LegacyMoveCommand {
    pub command_type: String,
    pub target: TargetRef,
    #[serde(default)]
    pub parameters: LegacyParameters,
}

#[derive(Deserialize, Debug, Default)]
pub struct LegacyParameters {
    #[serde(default)]
    pub movements: Vec<Movement>,
}

#[derive(Deserialize, Debug)]
pub struct Movement {
    pub direction: String,
    pub steps: u32,
}

/// Addressee of a command, by externally visible drone number.
#[derive(Deserialize, Debug)]
pub struct TargetRef {
    pub drone_id: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Wire {
    Refusal { error: String },
    Many(Vec<RawCommand>),
    One(RawCommand),
}

/// Parse a raw translation response into an [`Envelope`].
pub fn parse(json: &str) -> CommandResult<Envelope> {
    let wire: Wire = serde_json::from_str(json).map_err(CommandError::Json)?;
    Ok(match wire {
        Wire::Refusal { error } => Envelope::Error(error),
        Wire::Many(commands) => Envelope::Commands(commands),
        Wire::One(command) => Envelope::Commands(vec![command]),
    })
}
