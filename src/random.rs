/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use rand::rngs::ThreadRng;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Uniform draws in [0, 1), one per blink scheduling
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Seeded PRNG, so a blink schedule can be replayed exactly.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}

pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Cycles through a fixed list of draws
#[derive(Debug, Clone)]
pub struct FixedSequence {
    draws: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    /// Draws outside [0, 1) are clamped into it; an empty list always yields 0.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws
            .into()
            .into_iter()
            .map(|draw| draw.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { draws, position: 0 }
    }

    pub fn draws_taken(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.position % self.draws.len()];
        self.position += 1;
        value
    }
}
