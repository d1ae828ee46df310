//! Error types for the cleaning robot controller.

use crate::core::{CommandError, PowerError, RobotState, StatusError};
use thiserror::Error;

/// Failures reported by the hardware environment.
///
/// The controller propagates these unchanged. Retrying or defaulting a
/// reading is the driver's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareError {
    #[error("Infrared sensor read failed: {0}")]
    Sensor(String),

    #[error("Battery gauge read failed: {0}")]
    Battery(String),

    #[error("Motor actuation failed: {0}")]
    Motor(String),

    #[error("Output pin write failed: {0}")]
    Output(String),
}

/// Failures loading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("charge_threshold {0} is out of range, expected 0 to 100")]
    ThresholdOutOfRange(u8),
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum RobotError {
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Status error: {0}")]
    Status(#[from] StatusError),

    #[error("Power error: {0}")]
    Power(#[from] PowerError),

    #[error("Hardware error: {0}")]
    Hardware(#[from] HardwareError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Step computed from {expected} cannot be applied at {actual}")]
    StaleStep {
        expected: RobotState,
        actual: RobotState,
    },
}

pub type Result<T> = std::result::Result<T, RobotError>;
