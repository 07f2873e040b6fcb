//! Grid geometry: integer cell positions and movement directions.
//!
//! The grid uses screen coordinates: `x` grows rightward, `y` grows
//! downward, so `Direction::Up` is a `(0, -1)` delta.  Positions are plain
//! `i32` pairs; candidate positions produced by stepping off the grid are
//! representable and rejected by the grid's bounds check, never by this
//! module.

use std::fmt;
use std::str::FromStr;

use crate::SwarmError;

// ── Position ──────────────────────────────────────────────────────────────────

/// An integer grid cell.  Value equality and hashing by coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step in `direction` from `self`.
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The cell offset by `(dx, dy)` from `self`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (king-move) distance: `max(|dx|, |dy|)`.  A radius-`r` scan
    /// covers exactly the cells with Chebyshev distance `<= r`.
    #[inline]
    pub fn chebyshev(self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Manhattan distance: `|dx| + |dy|`.  Equals the length of the direct
    /// path a `MoveTo` behavior plans.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A unit movement direction.  `Stay` is a valid no-op move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

impl Direction {
    /// The four movement directions, in a fixed order used for uniform
    /// random draws (Explore/Search).  Excludes `Stay`.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Fixed unit delta in screen coordinates (y grows downward).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Stay => (0, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Stay => "stay",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SwarmError;

    /// Strict parse of the five canonical names.  Compass aliases
    /// (`north`, `east`, ...) are a concern of the text-command parser,
    /// not of the core vocabulary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "stay" => Ok(Direction::Stay),
            other => Err(SwarmError::Parse(format!("unknown direction `{other}`"))),
        }
    }
}
