//! Robot state record and its pure transitions.
//!
//! `RobotState` is a plain value. Every transition consumes a state and
//! returns the next one, so a transition can be computed, inspected and
//! tested without committing it anywhere.

use super::heading::{Heading, Turn};
use super::position::{OutOfGrid, Position};
use serde::{Deserialize, Serialize};

/// Position, heading and the obstacle report of the last command.
///
/// `obstacle` is `Some` only when the most recent command was a forward
/// move blocked by an obstacle. Turns and unblocked moves clear it.
///
/// # Example
///
/// ```rust
/// use cleaning_robot::core::{Heading, Position, RobotState, Turn};
///
/// let state = RobotState::initial()
///     .turned(Turn::Right)
///     .moved_forward(true);
///
/// assert_eq!(state.position, Position::ORIGIN);
/// assert_eq!(state.heading, Heading::West);
/// assert_eq!(state.obstacle, Some(Position::new(1, 0)));
/// assert_eq!(state.to_string(), "(0,0,W)(1,0)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct RobotState {
    pub position: Position,
    pub heading: Heading,
    pub obstacle: Option<Position>,
}

impl RobotState {
    /// State at power-on: origin, facing North, nothing reported.
    pub fn initial() -> Self {
        Self {
            position: Position::ORIGIN,
            heading: Heading::North,
            obstacle: None,
        }
    }

    /// State at `position` facing `heading`. The position must lie on the grid.
    pub fn new(position: Position, heading: Heading) -> Result<Self, OutOfGrid> {
        let position = Position::on_grid(position.x, position.y)?;
        Ok(Self {
            position,
            heading,
            obstacle: None,
        })
    }

    /// State after a turn. Position is kept, the obstacle report is cleared.
    pub fn turned(self, direction: Turn) -> Self {
        Self {
            position: self.position,
            heading: self.heading.turn(direction),
            obstacle: None,
        }
    }

    /// State after a forward command.
    ///
    /// A blocked move keeps the position and reports the cell that would have
    /// been entered. An unblocked move advances by the heading's delta. The
    /// grid edge blocks like an obstacle.
    pub fn moved_forward(self, obstacle_detected: bool) -> Self {
        let ahead = self.cell_ahead();
        if obstacle_detected || !ahead.is_on_grid() {
            Self {
                obstacle: Some(ahead),
                ..self
            }
        } else {
            Self {
                position: ahead,
                heading: self.heading,
                obstacle: None,
            }
        }
    }

    /// Same position and heading with the obstacle report dropped.
    pub fn without_obstacle(self) -> Self {
        Self {
            obstacle: None,
            ..self
        }
    }

    /// Cell directly ahead of the robot.
    pub fn cell_ahead(&self) -> Position {
        self.position.offset(self.heading.forward_delta())
    }
}
