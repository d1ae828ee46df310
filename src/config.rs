//! Configuration loading for the cleaning robot controller.

use crate::core::DEFAULT_CHARGE_THRESHOLD;
use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RobotConfig {
    #[serde(default)]
    pub power: PowerConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

/// Battery gating settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PowerConfig {
    /// Charge percentage at or below which cleaning is disabled (default: 10)
    #[serde(default = "default_charge_threshold")]
    pub charge_threshold: u8,
}

/// Motion settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct MotionConfig {
    /// Refuse movement commands while the battery needs recharging (default: false)
    #[serde(default = "default_gate_on_battery")]
    pub gate_on_battery: bool,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            charge_threshold: default_charge_threshold(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            gate_on_battery: default_gate_on_battery(),
        }
    }
}

fn default_charge_threshold() -> u8 {
    DEFAULT_CHARGE_THRESHOLD
}
fn default_gate_on_battery() -> bool {
    false
}

impl RobotConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RobotConfig = toml::from_str(content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.power.charge_threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(self.power.charge_threshold).into());
        }
        Ok(())
    }

    /// Configuration with motion refused on low battery.
    pub fn gated() -> Self {
        Self {
            motion: MotionConfig {
                gate_on_battery: true,
            },
            ..Self::default()
        }
    }
}
