//! Effectful robot control using Stillwater effects.
//!
//! This module is the "imperative shell" around the pure core: it reads the
//! infrared sensor and the battery gauge, drives the motors and switches the
//! cleaning outputs, then hands the computed state back to the tracker.
//!
//! # Key Concepts
//!
//! - **Hardware**: Capability traits the environment implements
//! - **Steps**: A command evaluated against the hardware, ready to commit
//! - **Controller**: `CleaningRobot` builds effects and commits their results
//!
//! Hardware errors are propagated as they are reported. The controller
//! never retries a reading or times out a motor.

mod hardware;
mod outcome;
mod robot;

pub use hardware::{BatteryGauge, CleaningOutputs, Motors, ObstacleSensor, RobotHardware};
pub use outcome::{CommandOutcome, CommandStep, REFUSED_MARKER};
pub use robot::CleaningRobot;
