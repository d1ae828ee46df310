//! Position tracker holding the live robot state.

use super::heading::Turn;
use super::state::RobotState;
use super::status::format_status;
use tracing::{debug, warn};

/// Owns the current [`RobotState`] and applies commands to it in place.
///
/// The tracker adds no states of its own; it commits the pure transitions
/// of [`RobotState`] and logs them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionTracker {
    state: RobotState,
}

impl PositionTracker {
    /// Create a tracker in the initial state.
    pub fn new() -> Self {
        Self {
            state: RobotState::initial(),
        }
    }

    /// Resume tracking from a known state.
    pub fn from_state(state: RobotState) -> Self {
        Self { state }
    }

    /// Reset to the origin, facing North, with no obstacle reported.
    pub fn initialize(&mut self) -> &RobotState {
        self.state = RobotState::initial();
        debug!(status = %self.state, "tracker initialized");
        &self.state
    }

    pub fn turn(&mut self, direction: Turn) -> &RobotState {
        let from = self.state.heading;
        self.state = self.state.turned(direction);
        debug!(
            ?direction,
            from = from.name(),
            to = self.state.heading.name(),
            "heading changed"
        );
        &self.state
    }

    pub fn move_forward(&mut self, obstacle_detected: bool) -> &RobotState {
        self.state = self.state.moved_forward(obstacle_detected);
        match self.state.obstacle {
            Some(obstacle) => warn!(x = obstacle.x, y = obstacle.y, "forward move blocked"),
            None => debug!(x = self.state.position.x, y = self.state.position.y, "moved forward"),
        }
        &self.state
    }

    /// Replace the state with one computed elsewhere.
    pub fn commit(&mut self, state: RobotState) -> &RobotState {
        self.state = state;
        &self.state
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// Current state in the status string format.
    pub fn status(&self) -> String {
        format_status(&self.state)
    }
}
