//! Hardware capabilities the controller runs against.
//!
//! Each trait is one collaborator of the robot. Production drivers wrap
//! GPIO pins and the I2C battery sensor; tests supply recording mocks.
//! Methods take `&self` so one environment value can be shared by every
//! effect; drivers that mutate pin state use interior mutability.

use crate::core::Turn;
use crate::error::HardwareError;

/// Infrared obstacle sensor facing forward.
pub trait ObstacleSensor {
    /// `true` when something blocks the cell ahead.
    fn obstacle_ahead(&self) -> Result<bool, HardwareError>;
}

/// Intelligent battery sensor.
pub trait BatteryGauge {
    /// Remaining charge as a percentage.
    fn charge_left(&self) -> Result<u8, HardwareError>;
}

/// Wheel and rotation motors.
pub trait Motors {
    /// Drive the wheel motor for one grid cell.
    fn drive_forward(&self) -> Result<(), HardwareError>;

    /// Spin the rotation motor a quarter turn.
    fn rotate(&self, direction: Turn) -> Result<(), HardwareError>;
}

/// Digital outputs of the cleaning subsystem.
pub trait CleaningOutputs {
    fn set_cleaning_system(&self, on: bool) -> Result<(), HardwareError>;

    fn set_recharge_led(&self, on: bool) -> Result<(), HardwareError>;
}

/// Every capability the controller needs.
pub trait RobotHardware: ObstacleSensor + BatteryGauge + Motors + CleaningOutputs {}

impl<T> RobotHardware for T where T: ObstacleSensor + BatteryGauge + Motors + CleaningOutputs {}
