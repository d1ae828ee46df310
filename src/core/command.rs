//! One-character movement commands.

use super::heading::Turn;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced while decoding a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unrecognized command '{0}', expected 'l', 'r' or 'f'")]
    Unrecognized(char),
}

/// A movement command accepted by the robot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Command {
    TurnLeft,
    TurnRight,
    Forward,
}

impl Command {
    pub const LEFT: char = 'l';
    pub const RIGHT: char = 'r';
    pub const FORWARD: char = 'f';

    /// Wire character for this command.
    pub fn symbol(self) -> char {
        match self {
            Self::TurnLeft => Self::LEFT,
            Self::TurnRight => Self::RIGHT,
            Self::Forward => Self::FORWARD,
        }
    }

    /// Turn direction, or `None` for a forward move.
    pub fn turn(self) -> Option<Turn> {
        match self {
            Self::TurnLeft => Some(Turn::Left),
            Self::TurnRight => Some(Turn::Right),
            Self::Forward => None,
        }
    }
}

impl TryFrom<char> for Command {
    type Error = CommandError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            Self::LEFT => Ok(Self::TurnLeft),
            Self::RIGHT => Ok(Self::TurnRight),
            Self::FORWARD => Ok(Self::Forward),
            other => Err(CommandError::Unrecognized(other)),
        }
    }
}

impl From<Turn> for Command {
    fn from(direction: Turn) -> Self {
        match direction {
            Turn::Left => Self::TurnLeft,
            Turn::Right => Self::TurnRight,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
