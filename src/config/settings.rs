//! Controller tuning loaded from an external RON file.
//!
//! Every field is optional in the file; anything left out keeps its default.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::ConfigError;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/controller.ron";

/// Controller configuration loaded from assets/config/controller.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Movement speed in units per second for newly spawned controllers
    pub move_speed: f32,
    /// Degrees of rotation per unit of mouse axis
    pub look_sensitivity: f32,
    /// Camera height above the controller origin
    pub eye_height: f32,
    /// Downward acceleration applied while airborne, units per second squared
    pub gravity: f32,
    /// Maximum pitch in degrees, applied symmetrically up and down
    pub pitch_limit: f32,
    /// Converts raw mouse motion (pixels) into axis units
    pub mouse_axis_scale: f32,
    /// Physics tick rate
    pub fixed_timestep_hz: f64,
    /// Unlock and show the cursor once the last controller is gone
    pub restore_cursor_on_removal: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            look_sensitivity: 2.0,
            eye_height: 1.5,
            gravity: 9.81,
            pitch_limit: 90.0,
            mouse_axis_scale: 0.1,
            fixed_timestep_hz: 50.0,
            restore_cursor_on_removal: true,
        }
    }
}

impl ControllerConfig {
    /// Load config from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::try_load(DEFAULT_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded controller config from {}", DEFAULT_CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::FileNotFound(_)) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a config file.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound(display.clone()),
            _ => ConfigError::ReadError {
                path: display.clone(),
                details: e.to_string(),
            },
        })?;

        Self::from_ron_str(&contents, &display)
    }

    /// Parse and validate config from a RON string. `source` names it in errors.
    pub fn from_ron_str(contents: &str, source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the controller's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(invalid("move_speed", "must be a finite, non-negative number", self.move_speed));
        }
        if !self.look_sensitivity.is_finite() {
            return Err(invalid("look_sensitivity", "must be finite", self.look_sensitivity));
        }
        if !self.eye_height.is_finite() {
            return Err(invalid("eye_height", "must be finite", self.eye_height));
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(invalid("gravity", "must be a finite, non-negative number", self.gravity));
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit <= 90.0) {
            return Err(invalid("pitch_limit", "must be in (0, 90] degrees", self.pitch_limit));
        }
        if !self.mouse_axis_scale.is_finite() {
            return Err(invalid("mouse_axis_scale", "must be finite", self.mouse_axis_scale));
        }
        if !self.fixed_timestep_hz.is_finite() || self.fixed_timestep_hz <= 0.0 {
            return Err(invalid("fixed_timestep_hz", "must be a positive rate", self.fixed_timestep_hz));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, rule: &str, value: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        details: format!("{} (got {})", rule, value),
    }
}
