//! Goal translation: natural-language goals in, command envelopes out.
//!
//! The trait seam lets the simulation accept goals from any source — a
//! remote language-model service, the deterministic rule parser, or the
//! mock used in demos and tests.  Translation happens entirely outside the
//! tick loop; its output is compiled and queued, then applied as one batch
//! at the next tick boundary.

use tracing::debug;

use swarm_core::DroneId;

use crate::envelope::{
    Envelope, LegacyMoveCommand, LegacyParameters, Movement, RawCommand, TargetRef,
};
use crate::text::parse_text;
use crate::CommandResult;

/// Turns a free-form goal into a command envelope for the given roster.
///
/// `Err` means the translator itself failed (transport, malformed output);
/// a goal the translator understood but refuses comes back as
/// `Ok(Envelope::Error(..))`.
pub trait Translator {
    fn translate(&mut self, goal: &str, roster: &[DroneId]) -> CommandResult<Envelope>;
}

// ── MockTranslator ────────────────────────────────────────────────────────────

/// Canned translator for demos: any goal becomes "first drone, up 2 then
/// right 3" in the legacy schema.
#[derive(Default)]
pub struct MockTranslator;

impl Translator for MockTranslator {
    fn translate(&mut self, goal: &str, roster: &[DroneId]) -> CommandResult<Envelope> {
        debug!(goal, "mock translation");
        let Some(first) = roster.first() else {
            return Ok(Envelope::Error("no drones available".to_owned()));
        };
        Ok(Envelope::Commands(vec![RawCommand::Legacy(LegacyMoveCommand {
            command_type: "move".to_owned(),
            target: TargetRef { drone_id: first.0 },
            parameters: LegacyParameters {
                movements: vec![
                    Movement { direction: "up".to_owned(), steps: 2 },
                    Movement { direction: "right".to_owned(), steps: 3 },
                ],
            },
        })]))
    }
}

// ── RuleTranslator ────────────────────────────────────────────────────────────

const MOVEMENT_KEYWORDS: &[&str] = &[
    "move", "go", "take", "send", "navigate", "direct", "guide", "fly", "left", "right", "up",
    "down", "north", "south", "east", "west",
];

const DRONE_KEYWORDS: &[&str] = &["drone", "uav", "quadcopter", "copter"];

/// Deterministic offline translator: a keyword gate decides whether the
/// goal looks like a movement command at all, then the text grammar parses
/// it.  Anything else comes back as an envelope-level refusal so the
/// simulation keeps running.
#[derive(Default)]
pub struct RuleTranslator;

impl RuleTranslator {
    fn looks_like_movement(goal: &str) -> bool {
        let lower = goal.to_ascii_lowercase();
        let has_movement = MOVEMENT_KEYWORDS.iter().any(|k| lower.contains(k));
        let has_drone = DRONE_KEYWORDS.iter().any(|k| lower.contains(k));
        has_movement && has_drone
    }
}

impl Translator for RuleTranslator {
    fn translate(&mut self, goal: &str, _roster: &[DroneId]) -> CommandResult<Envelope> {
        if !Self::looks_like_movement(goal) {
            return Ok(Envelope::Error(
                "only movement commands are supported".to_owned(),
            ));
        }
        match parse_text(goal) {
            Ok(command) => Ok(Envelope::Commands(vec![command.into_raw()])),
            Err(error) => Ok(Envelope::Error(error.to_string())),
        }
    }
}
