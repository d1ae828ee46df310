//! Compass heading state machine.
//!
//! The heading is one of four discrete states. Turning is a fixed cyclic
//! permutation over those states and every heading maps to exactly one
//! grid displacement for a forward move. Both mappings are total, so none
//! of the functions here can fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction of a turn command.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// Compass heading of the robot.
///
/// # Example
///
/// ```rust
/// use cleaning_robot::core::{Heading, Turn};
///
/// let heading = Heading::North.turn(Turn::Left);
/// assert_eq!(heading, Heading::East);
/// assert_eq!(heading.forward_delta(), (-1, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

/// Error returned when a character does not name a heading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown heading '{0}', expected one of N, E, S, W")]
pub struct UnknownHeading(pub String);

impl Heading {
    /// All four headings in left-turn order starting from North.
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Heading after a left turn.
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Heading after a right turn. Inverse of [`Heading::turn_left`].
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Heading after turning in the given direction.
    pub fn turn(self, direction: Turn) -> Self {
        match direction {
            Turn::Left => self.turn_left(),
            Turn::Right => self.turn_right(),
        }
    }

    /// Grid displacement `(dx, dy)` of one forward move.
    ///
    /// East moves towards negative x and West towards positive x. Consumers
    /// of the status string rely on this orientation.
    pub fn forward_delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (-1, 0),
            Self::South => (0, -1),
            Self::West => (1, 0),
        }
    }

    /// Single-character code used in status strings.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parse a single-character heading code.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Human readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                Self::from_symbol(symbol).ok_or_else(|| UnknownHeading(s.to_string()))
            }
            _ => Err(UnknownHeading(s.to_string())),
        }
    }
}
