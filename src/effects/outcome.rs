//! Results of executing a command against the hardware.

use crate::core::{Command, RobotState, StatusError};
use std::fmt;
use std::str::FromStr;

/// Marker prepended to the status of a refused command.
pub const REFUSED_MARKER: char = '!';

/// What happened to a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Command ran; carries the resulting state
    Executed(RobotState),

    /// Battery too low to move; carries the unchanged state
    Refused(RobotState),
}

impl CommandOutcome {
    pub fn state(&self) -> &RobotState {
        match self {
            Self::Executed(state) | Self::Refused(state) => state,
        }
    }

    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Refused(_))
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executed(state) => write!(f, "{}", state),
            Self::Refused(state) => write!(f, "{}{}", REFUSED_MARKER, state),
        }
    }
}

impl FromStr for CommandOutcome {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(REFUSED_MARKER) {
            Some(status) => Ok(Self::Refused(status.parse()?)),
            None => Ok(Self::Executed(s.parse()?)),
        }
    }
}

/// A command evaluated against the hardware but not yet committed.
///
/// Produced by running [`CleaningRobot::step`](super::CleaningRobot::step)
/// and consumed by [`CleaningRobot::apply`](super::CleaningRobot::apply).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandStep {
    pub command: Command,
    pub from: RobotState,
    pub outcome: CommandOutcome,
}
