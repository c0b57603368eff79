/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use crate::clock::TimeSource;
use crate::config::BlinkConfig;
use crate::error::BlinkError;
use crate::eye_blink::EyeState::{Closed, Closing, Interval, Opening, Seed};
use crate::parameter::ParameterSink;
use crate::random::{RandomSource, ThreadRandom};
use crate::units::{progress, Milliseconds};
use log::{debug, warn};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum EyeState {
    /// Fresh or re-enabled, no blink scheduled yet
    #[default]
    Seed,
    /// Eyes open, waiting for the next blink
    Interval,
    Closing,
    Closed,
    Opening,
}

/// Where the automaton stands: its state, when that state was entered,
/// and when the next blink is due (only meaningful during `Interval`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phase {
    pub state: EyeState,
    pub state_start_time: Milliseconds,
    pub next_blink_time: Milliseconds,
}

impl Phase {
    fn enter(state: EyeState, now: Milliseconds, next_blink_time: Milliseconds) -> Self {
        Self {
            state,
            state_start_time: now,
            next_blink_time,
        }
    }

    /// One frame of the automaton. Returns the next phase and the eye openness
    /// for this frame, 1 fully open and 0 fully closed. `draw` is only called
    /// when a new blink gets scheduled.
    pub fn advance(
        self,
        now: Milliseconds,
        config: &BlinkConfig,
        draw: impl FnOnce() -> f64,
    ) -> (Phase, f32) {
        let elapsed = now.saturating_since(self.state_start_time);
        match self.state {
            Seed => {
                let next = next_blink_time(now, config.interval, draw());
                (Phase::enter(Interval, now, next), 1.0)
            }
            Interval => {
                if now >= self.next_blink_time {
                    (Phase::enter(Closing, now, self.next_blink_time), 1.0)
                } else {
                    (self, 1.0)
                }
            }
            Closing => {
                let closed = progress(elapsed, config.closing);
                if closed >= 1.0 {
                    (Phase::enter(Closed, now, self.next_blink_time), 0.0)
                } else {
                    (self, 1.0 - closed)
                }
            }
            Closed => {
                if progress(elapsed, config.closed) >= 1.0 {
                    (Phase::enter(Opening, now, self.next_blink_time), 0.0)
                } else {
                    (self, 0.0)
                }
            }
            Opening => {
                let opened = progress(elapsed, config.opening);
                if opened >= 1.0 {
                    let next = next_blink_time(now, config.interval, draw());
                    (Phase::enter(Interval, now, next), 1.0)
                } else {
                    (self, opened)
                }
            }
        }
    }
}

/// Schedule a blink `draw * (2 * interval - 1)` milliseconds after `now`,
/// so blinks average one per interval. Never earlier than `now`.
pub fn next_blink_time(now: Milliseconds, interval: Milliseconds, draw: f64) -> Milliseconds {
    let span = 2.0 * (*interval as f64) - 1.0;
    let offset = (draw * span).max(0.0);
    now + Milliseconds(offset as u64)
}

/// Drives a pair of eye-open parameters through randomly spaced blinks.
/// Both eyes always receive the same value.
pub struct EyeBlink {
    enabled: bool,
    phase: Phase,
    config: BlinkConfig,
    random: Box<dyn RandomSource>,
}

impl Default for EyeBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl EyeBlink {
    /// Default timings, disabled, unseeded randomness.
    pub fn new() -> Self {
        Self {
            enabled: false,
            phase: Phase::default(),
            config: BlinkConfig::default(),
            random: Box::new(ThreadRandom::new()),
        }
    }

    pub fn with_config(
        config: BlinkConfig,
        random: impl RandomSource + 'static,
    ) -> Result<Self, BlinkError> {
        config.validate()?;
        Ok(Self {
            enabled: false,
            phase: Phase::default(),
            config,
            random: Box::new(random),
        })
    }

    /// Enabling always restarts from `Seed`; disabling abandons any blink in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        if enabled {
            self.phase = Phase::default();
        }
        debug!("eye blink enabled: {enabled}");
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Applies from the next scheduled blink on.
    pub fn set_interval(&mut self, interval: Milliseconds) -> Result<(), BlinkError> {
        if interval == Milliseconds::ZERO {
            warn!("rejected blink interval {interval}");
            return Err(BlinkError::InvalidInterval(interval));
        }
        self.config.interval = interval;
        Ok(())
    }

    pub fn set_eye_motion(
        &mut self,
        closing: Milliseconds,
        closed: Milliseconds,
        opening: Milliseconds,
    ) {
        self.config.closing = closing;
        self.config.closed = closed;
        self.config.opening = opening;
    }

    pub fn compute_next_blink_time(&mut self, now: Milliseconds) -> Milliseconds {
        next_blink_time(now, self.config.interval, self.random.next_unit())
    }

    /// Advance to `now` and write the openness to both eye parameters.
    /// Returns the written value, or `None` without touching the sink when disabled.
    pub fn update(
        &mut self,
        now: Milliseconds,
        sink: &mut impl ParameterSink,
    ) -> Result<Option<f32>, BlinkError> {
        if !self.enabled {
            return Ok(None);
        }
        let random = &mut self.random;
        let (phase, openness) = self.phase.advance(now, &self.config, || random.next_unit());
        if phase.state != self.phase.state {
            debug!("{} -> {} at {now}", self.phase.state, phase.state);
            if phase.state == Interval {
                debug!("next blink at {}", phase.next_blink_time);
            }
        }
        self.phase = phase;
        let value = if self.config.closed_at_zero {
            openness
        } else {
            -openness
        };
        sink.set_param_float(&self.config.eye_id_left, value)?;
        sink.set_param_float(&self.config.eye_id_right, value)?;
        Ok(Some(value))
    }

    /// Like `update`, reading the time from `clock`.
    pub fn update_param(
        &mut self,
        clock: &impl TimeSource,
        sink: &mut impl ParameterSink,
    ) -> Result<Option<f32>, BlinkError> {
        self.update(clock.now(), sink)
    }

    pub fn state(&self) -> EyeState {
        self.phase.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state_start_time(&self) -> Milliseconds {
        self.phase.state_start_time
    }

    pub fn next_blink_time(&self) -> Milliseconds {
        self.phase.next_blink_time
    }

    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }
}
