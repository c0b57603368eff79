/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use crate::units::Milliseconds;
use std::fmt;

/// Error types that can occur while configuring or driving a blink
#[derive(Debug, Clone, PartialEq)]
pub enum BlinkError {
    /// Blink interval must be positive, otherwise the schedule range is empty
    InvalidInterval(Milliseconds),
    /// The host model has no parameter with this id
    UnknownParameter(String),
    /// Configuration could not be read or parsed
    Config(String),
}

impl fmt::Display for BlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlinkError::InvalidInterval(interval) => {
                write!(f, "Invalid blink interval {interval}, must be positive")
            }
            BlinkError::UnknownParameter(id) => write!(f, "Unknown parameter '{id}'"),
            BlinkError::Config(message) => write!(f, "Configuration error: {message}"),
        }
    }
}

impl std::error::Error for BlinkError {}
