/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Time units for the blink automaton
//!
//! Every timestamp and duration is user-time in whole milliseconds.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Deref};

/// Time in milliseconds, used both as a monotonic timestamp and as a duration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Milliseconds(pub u64);

impl Deref for Milliseconds {
    type Target = u64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Milliseconds {
    type Output = Milliseconds;
    fn add(self, rhs: Milliseconds) -> Self::Output {
        Milliseconds(self.0.saturating_add(rhs.0))
    }
}

impl Display for Milliseconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl Milliseconds {
    pub const ZERO: Milliseconds = Milliseconds(0);

    /// Time elapsed since `earlier`, zero if the clock has not reached it yet
    pub fn saturating_since(self, earlier: Milliseconds) -> Milliseconds {
        Milliseconds(self.0.saturating_sub(earlier.0))
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to at most 1.
/// A zero duration counts as already complete.
pub fn progress(elapsed: Milliseconds, duration: Milliseconds) -> f32 {
    if duration == Milliseconds::ZERO {
        return 1.0;
    }
    (elapsed.as_f32() / duration.as_f32()).min(1.0)
}
