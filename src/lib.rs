//! Cleaning robot: position and command state machine for a grid robot
//!
//! The controller follows a "pure core, imperative shell" layout. The core
//! tracks the robot's grid position and compass heading and turns commands
//! into state transitions with pure functions. The shell reads the sensors,
//! drives the motors and switches the cleaning subsystem around it.
//!
//! # Core Concepts
//!
//! - **Heading**: One of four compass states with total turn and delta maps
//! - **RobotState**: Position, heading and the last obstacle report
//! - **Status**: The `(x,y,H)` / `(x,y,H)(ox,oy)` textual contract
//! - **Power gating**: Cleaning enabled only while charge is above 10%
//!
//! # Example
//!
//! ```rust
//! use cleaning_robot::core::{format_status, PositionTracker, Turn};
//!
//! let mut tracker = PositionTracker::new();
//! tracker.turn(Turn::Right);
//! tracker.move_forward(true);
//!
//! assert_eq!(format_status(tracker.state()), "(0,0,W)(1,0)");
//!
//! tracker.move_forward(false);
//! assert_eq!(tracker.status(), "(1,0,W)");
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod error;

// Re-export commonly used types
pub use config::RobotConfig;
pub use self::core::{Command, Heading, Position, PositionTracker, PowerStatus, RobotState, Turn};
pub use effects::{CleaningRobot, CommandOutcome};
pub use error::{ConfigError, HardwareError, Result, RobotError};
