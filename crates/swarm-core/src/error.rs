//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `SwarmError` via `From` impls, or keep them separate and wrap
//! `SwarmError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::{DroneId, EntityId};

/// The top-level error type for `swarm-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("drone {0} not found")]
    DroneNotFound(DroneId),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `swarm-*` crates.
pub type SwarmResult<T> = Result<T, SwarmError>;
