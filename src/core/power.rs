//! Battery gating of the cleaning subsystem.
//!
//! The decision is a pure function of the charge percentage. Writing the
//! resulting flags to the cleaning system and the recharge LED is left to
//! the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Charge at or below which cleaning is disabled.
pub const DEFAULT_CHARGE_THRESHOLD: u8 = 10;

/// Errors produced while validating a charge reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerError {
    #[error("Charge {0}% is out of range, expected 0 to 100")]
    ChargeOutOfRange(u8),
}

/// Battery charge percentage in `0..=100`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ChargeLevel(u8);

impl ChargeLevel {
    pub fn new(percent: u8) -> Result<Self, PowerError> {
        if percent > 100 {
            return Err(PowerError::ChargeOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ChargeLevel {
    type Error = PowerError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

/// Output signals derived from the battery charge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PowerStatus {
    pub cleaning_enabled: bool,
    pub recharge_indicator: bool,
}

impl PowerStatus {
    /// Gate on `threshold`: strictly above enables cleaning, anything else
    /// lights the recharge indicator.
    ///
    /// ```rust
    /// use cleaning_robot::core::{ChargeLevel, PowerStatus};
    ///
    /// let charge = ChargeLevel::new(10).unwrap();
    /// let status = PowerStatus::from_charge(charge, 10);
    /// assert!(!status.cleaning_enabled);
    /// assert!(status.recharge_indicator);
    /// ```
    pub fn from_charge(charge: ChargeLevel, threshold: u8) -> Self {
        let cleaning_enabled = charge.percent() > threshold;
        Self {
            cleaning_enabled,
            recharge_indicator: !cleaning_enabled,
        }
    }

    /// Whether the robot has enough charge to keep working.
    pub fn is_charged(&self) -> bool {
        self.cleaning_enabled
    }
}

impl From<ChargeLevel> for PowerStatus {
    fn from(charge: ChargeLevel) -> Self {
        Self::from_charge(charge, DEFAULT_CHARGE_THRESHOLD)
    }
}
