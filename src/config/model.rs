//! Configuration data model.
//!
//! All structs derive `Deserialize` for loading from TOML.
//! Every field has a sensible default so the simulator works out of the box.

use serde::Deserialize;
use std::time::Duration;

use super::ConfigError;
use crate::session::content::CALIBRATION_MESSAGES;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub grass: GrassConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calibration.validate()?;
        self.grass.validate()
    }
}

/// What the terminal can't tell us about the input device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct DeviceConfig {
    /// `true` for a touch screen. Unset means a regular mouse.
    #[serde(default)]
    pub coarse_pointer: Option<bool>,
}

/// Timing of the fake calibration screen.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default = "default_calibration_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_ticks_per_message")]
    pub ticks_per_message: u32,
    /// Progress percentage past which the bar jumps back, once.
    #[serde(default = "default_jump_threshold_pct")]
    pub jump_threshold_pct: f64,
    /// Fraction of the total run the tick counter is rewound to.
    #[serde(default = "default_rewind_fraction")]
    pub rewind_fraction: f64,
    /// Pause on the 100% frame.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_calibration_tick_ms(),
            ticks_per_message: default_ticks_per_message(),
            jump_threshold_pct: default_jump_threshold_pct(),
            rewind_fraction: default_rewind_fraction(),
            settle_ms: default_settle_ms(),
        }
    }
}

impl CalibrationConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::zero("calibration.tick_ms"));
        }
        if self.ticks_per_message == 0 {
            return Err(ConfigError::zero("calibration.ticks_per_message"));
        }
        let max_ticks_per_message = u32::MAX / CALIBRATION_MESSAGES.len() as u32;
        if self.ticks_per_message > max_ticks_per_message {
            return Err(ConfigError::OutOfRange {
                field: "calibration.ticks_per_message",
                reason: format!("must be at most {}", max_ticks_per_message),
            });
        }
        if !(self.jump_threshold_pct > 0.0 && self.jump_threshold_pct <= 100.0) {
            return Err(ConfigError::OutOfRange {
                field: "calibration.jump_threshold_pct",
                reason: "must be in (0, 100]".into(),
            });
        }
        if !(self.rewind_fraction >= 0.0 && self.rewind_fraction * 100.0 < self.jump_threshold_pct) {
            return Err(ConfigError::OutOfRange {
                field: "calibration.rewind_fraction",
                reason: format!(
                    "must be at least 0 and rewind below the {}% jump threshold",
                    self.jump_threshold_pct
                ),
            });
        }
        Ok(())
    }
}

/// Grass countdown and the pointer-movement window.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GrassConfig {
    #[serde(default = "default_touch_seconds")]
    pub touch_seconds: u32,
    #[serde(default = "default_pointer_seconds")]
    pub pointer_seconds: u32,
    #[serde(default = "default_countdown_tick_ms")]
    pub countdown_tick_ms: u64,
    #[serde(default = "default_movement_window_ms")]
    pub movement_window_ms: u64,
    /// Moves allowed per window before the user is told to relax.
    #[serde(default = "default_movement_threshold")]
    pub movement_threshold: u32,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            touch_seconds: default_touch_seconds(),
            pointer_seconds: default_pointer_seconds(),
            countdown_tick_ms: default_countdown_tick_ms(),
            movement_window_ms: default_movement_window_ms(),
            movement_threshold: default_movement_threshold(),
        }
    }
}

impl GrassConfig {
    pub fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms)
    }

    pub fn movement_window(&self) -> Duration {
        Duration::from_millis(self.movement_window_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.touch_seconds == 0 {
            return Err(ConfigError::zero("grass.touch_seconds"));
        }
        if self.pointer_seconds == 0 {
            return Err(ConfigError::zero("grass.pointer_seconds"));
        }
        if self.countdown_tick_ms == 0 {
            return Err(ConfigError::zero("grass.countdown_tick_ms"));
        }
        if self.movement_window_ms == 0 {
            return Err(ConfigError::zero("grass.movement_window_ms"));
        }
        Ok(())
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive, e.g. `info` or `touchgrass=trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_calibration_tick_ms() -> u64 {
    100
}
fn default_ticks_per_message() -> u32 {
    15
}
fn default_jump_threshold_pct() -> f64 {
    85.0
}
fn default_rewind_fraction() -> f64 {
    0.65
}
fn default_settle_ms() -> u64 {
    1500
}
fn default_touch_seconds() -> u32 {
    15
}
fn default_pointer_seconds() -> u32 {
    45
}
fn default_countdown_tick_ms() -> u64 {
    1000
}
fn default_movement_window_ms() -> u64 {
    1000
}
fn default_movement_threshold() -> u32 {
    40
}
fn default_log_dir() -> String {
    "~/.local/share/touchgrass/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.device.coarse_pointer, None);
        assert_eq!(config.grass.pointer_seconds, 45);
        assert_eq!(config.grass.touch_seconds, 15);
        assert_eq!(config.calibration.tick(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [device]
            coarse_pointer = true

            [grass]
            movement_threshold = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.device.coarse_pointer, Some(true));
        assert_eq!(config.grass.movement_threshold, 10);
        assert_eq!(config.grass.movement_window_ms, 1000);
        assert_eq!(config.calibration, CalibrationConfig::default());
    }

    #[test]
    fn test_validation_bounds_ticks_per_message() {
        let mut config = AppConfig::default();
        config.calibration.ticks_per_message = 500_000_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "calibration.ticks_per_message", .. })
        ));

        config.calibration.ticks_per_message = u32::MAX / CALIBRATION_MESSAGES.len() as u32;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_periods() {
        let mut config = AppConfig::default();
        config.calibration.ticks_per_message = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Zero { field: "calibration.ticks_per_message" })
        ));

        let mut config = AppConfig::default();
        config.grass.countdown_tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_requires_rewind_below_jump() {
        let mut config = AppConfig::default();
        config.calibration.rewind_fraction = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "calibration.rewind_fraction", .. })
        ));

        let mut config = AppConfig::default();
        config.calibration.jump_threshold_pct = 100.0;
        assert!(config.validate().is_ok());
        config.calibration.jump_threshold_pct = 101.0;
        assert!(config.validate().is_err());
    }
}
