//! Plain-data descriptions of behaviors and actions.
//!
//! A `BehaviorPlan` is what crosses module boundaries: the command layer
//! produces plans from JSON or text, event handlers produce plans as
//! reactions, and the agent crate's factory turns a plan into a live,
//! stateful `Behavior`.  Keeping plans as dumb data means no crate below
//! the agent layer needs to know how behaviors execute.
//!
//! Limit convention: every step/loop limit is a signed integer where a
//! negative value means "unbounded".  Zero is a valid limit that is reached
//! immediately.

use crate::{Direction, Position};

/// A multi-tick plan a drone can be assigned.
///
/// Field meanings mirror the wire parameter schemas of the command layer:
/// `MoveTo {x, y}`, `Explore {steps}`, `Patrol {waypoints, loops}`,
/// `Search {steps_between_scans, scan_range, max_steps}`.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BehaviorPlan {
    /// Walk directly to `target` (x resolved before y), replanning on
    /// deviation.
    MoveTo { target: Position },

    /// Random cardinal walk for `steps` moves; negative = unbounded.
    Explore { steps: i32 },

    /// Cycle through `waypoints` in order for `loops` full loops;
    /// negative = unbounded.
    Patrol { waypoints: Vec<Position>, loops: i32 },

    /// Random walk interleaved with a `Scan(scan_range)` every
    /// `steps_between_scans` completed moves, for at most `max_steps`
    /// moves; negative = unbounded.
    Search {
        steps_between_scans: u32,
        scan_range: u32,
        max_steps: i32,
    },
}

/// A single primitive action to enqueue on a drone.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionRequest {
    /// One single-attempt move in `Direction`.
    Move(Direction),
    /// Idle for the given number of ticks.
    Wait(u32),
    /// Instantaneous Chebyshev-square scan of the given radius.
    Scan(u32),
}
