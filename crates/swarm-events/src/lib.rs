//! `swarm-events` — synchronous named-event publish/subscribe.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`event`]    | `Event` (name + payload map), `Value`, topic constants   |
//! | [`bus`]      | `EventBus` — subscription-ordered synchronous dispatch   |
//! | [`reaction`] | `DroneCommand`, `Reactions` — how handlers mutate drones |
//!
//! # Dispatch contract
//!
//! `EventBus::trigger` invokes every handler subscribed to the event's name,
//! synchronously, in subscription order, on the caller's stack.  Handlers
//! receive the same immutable `&Event` plus a `&mut Reactions` buffer.
//!
//! A handler can never hold `&mut` to the drone that is mid-update, so
//! agent mutation goes through the buffer: the handler pushes
//! [`DroneCommand`]s and the simulation driver drains and applies them as
//! soon as the triggering drone's update returns — before the next drone
//! updates, within the same tick.  This is safe for the triggering drone
//! because events fire only after the causing action has already marked
//! itself completed.

pub mod bus;
pub mod event;
pub mod reaction;


pub use bus::EventBus;
pub use event::{Event, EventData, Value, topics};
pub use reaction::{DroneCommand, Reactions};
