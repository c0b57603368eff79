/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use crate::units::Milliseconds;
use instant::Instant;
use std::cell::Cell;

/// Monotonic user-time in milliseconds
pub trait TimeSource {
    fn now(&self) -> Milliseconds;
}

/// Wall clock measured from construction
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Milliseconds {
        Milliseconds(self.start.elapsed().as_millis() as u64)
    }
}

/// Clock that only moves when told to, for frame-stepped drivers
#[derive(Debug, Default)]
pub struct ManualClock {
    time: Cell<Milliseconds>,
}

impl ManualClock {
    pub fn starting_at(time: Milliseconds) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    pub fn advance(&self, by: Milliseconds) -> Milliseconds {
        let time = self.time.get() + by;
        self.time.set(time);
        time
    }

    /// Never moves backwards
    pub fn set(&self, time: Milliseconds) {
        self.time.set(self.time.get().max(time));
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Milliseconds {
        self.time.get()
    }
}
