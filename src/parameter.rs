/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use crate::error::BlinkError;
use std::collections::HashMap;

/// The host model's named-parameter interface
pub trait ParameterSink {
    fn set_param_float(&mut self, id: &str, value: f32) -> Result<(), BlinkError>;
}

impl<S: ParameterSink + ?Sized> ParameterSink for &mut S {
    fn set_param_float(&mut self, id: &str, value: f32) -> Result<(), BlinkError> {
        (**self).set_param_float(id, value)
    }
}

/// Minimal host model: a table of registered float parameters.
/// Writing an id that was never registered fails.
#[derive(Debug, Default, Clone)]
pub struct ParameterMap {
    values: HashMap<String, f32>,
    writes: usize,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters<'a>(ids: impl IntoIterator<Item = &'a str>, initial: f32) -> Self {
        let mut map = Self::new();
        for id in ids {
            map.register(id, initial);
        }
        map
    }

    pub fn register(&mut self, id: impl Into<String>, initial: f32) {
        self.values.insert(id.into(), initial);
    }

    pub fn get(&self, id: &str) -> Option<f32> {
        self.values.get(id).copied()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ParameterSink for ParameterMap {
    fn set_param_float(&mut self, id: &str, value: f32) -> Result<(), BlinkError> {
        let slot = self
            .values
            .get_mut(id)
            .ok_or_else(|| BlinkError::UnknownParameter(id.to_string()))?;
        *slot = value;
        self.writes += 1;
        Ok(())
    }
}
