//! Core robot state machine types and logic.
//!
//! This module contains the pure core of the controller:
//! - The compass heading and its turn/delta mappings
//! - Grid positions and the robot state record
//! - The status string format
//! - Command decoding and battery gating
//!
//! Nothing in this module touches hardware. Sensor readings and charge
//! levels come in as arguments, and results go out as values.

mod command;
mod heading;
mod position;
mod power;
mod state;
mod status;
mod tracker;

pub use command::{Command, CommandError};
pub use heading::{Heading, Turn, UnknownHeading};
pub use position::{OutOfGrid, Position};
pub use power::{ChargeLevel, PowerError, PowerStatus, DEFAULT_CHARGE_THRESHOLD};
pub use state::RobotState;
pub use status::{format_status, StatusError};
pub use tracker::PositionTracker;
