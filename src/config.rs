/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use crate::error::BlinkError;
use crate::units::Milliseconds;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EYE_ID_LEFT: &str = "PARAM_EYE_L_OPEN";
pub const DEFAULT_EYE_ID_RIGHT: &str = "PARAM_EYE_R_OPEN";

/// Timing and target parameters for one blinking character.
///
/// # Example
/// ```ignore
/// let config = BlinkConfig::default()
///     .interval(Milliseconds(3000))
///     .eye_motion(Milliseconds(80), Milliseconds(40), Milliseconds(120))
///     .eye_ids("PARAM_EYE_L", "PARAM_EYE_R")
///     .closed_at_one();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    /// Mean spacing between blinks
    pub interval: Milliseconds,
    pub closing: Milliseconds,
    pub closed: Milliseconds,
    pub opening: Milliseconds,
    pub eye_id_left: String,
    pub eye_id_right: String,
    /// Parameter value 0 means closed; otherwise the emitted value is negated
    pub closed_at_zero: bool,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            interval: Milliseconds(4000),
            closing: Milliseconds(100),
            closed: Milliseconds(50),
            opening: Milliseconds(150),
            eye_id_left: DEFAULT_EYE_ID_LEFT.to_string(),
            eye_id_right: DEFAULT_EYE_ID_RIGHT.to_string(),
            closed_at_zero: true,
        }
    }
}

impl BlinkConfig {
    pub fn interval(mut self, interval: Milliseconds) -> Self {
        self.interval = interval;
        self
    }

    /// Set the closing, closed and opening durations.
    pub fn eye_motion(
        mut self,
        closing: Milliseconds,
        closed: Milliseconds,
        opening: Milliseconds,
    ) -> Self {
        self.closing = closing;
        self.closed = closed;
        self.opening = opening;
        self
    }

    pub fn eye_ids(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.eye_id_left = left.into();
        self.eye_id_right = right.into();
        self
    }

    pub fn closed_at_one(mut self) -> Self {
        self.closed_at_zero = false;
        self
    }

    pub fn validate(&self) -> Result<(), BlinkError> {
        if self.interval == Milliseconds::ZERO {
            warn!("invalid blink interval {} in configuration", self.interval);
            return Err(BlinkError::InvalidInterval(self.interval));
        }
        Ok(())
    }

    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, BlinkError> {
        let config: BlinkConfig =
            serde_json::from_str(json).map_err(|e| BlinkError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BlinkError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| BlinkError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}
