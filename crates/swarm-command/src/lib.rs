//! `swarm-command` — the operator command layer.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`envelope`]   | Wire schemas: behavior commands, legacy moves, refusals  |
//! | [`compile`]    | Roster/parameter validation → routed `DroneCommand`s     |
//! | [`text`]       | Regex-free text-command grammar                          |
//! | [`translator`] | `Translator` seam plus the mock and rule implementations |
//!
//! # Pipeline
//!
//! ```text
//! goal ──translate──▶ Envelope ──compile──▶ CompiledBatch ──▶ sim queue
//! text ──parse_text─▶ TextCommand ─┘
//! ```
//!
//! Every stage is fallible and side-effect free: nothing touches a drone
//! until the simulation applies a compiled batch at a tick boundary.

pub mod compile;
pub mod envelope;
pub mod error;
pub mod text;
pub mod translator;


pub use compile::{compile, plan_from, CompiledBatch};
pub use envelope::{parse, BehaviorCommand, Envelope, LegacyMoveCommand, RawCommand, TargetRef};
pub use error::{CommandError, CommandResult};
pub use text::{parse_text, TextCommand};
pub use translator::{MockTranslator, RuleTranslator, Translator};
