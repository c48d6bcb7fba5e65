//! Seeded Park-Miller ("minimal standard") generator
//!
//! Level layouts are a pure function of this stream, so the constants and the
//! float conversion must never change: any deviation generates different
//! levels for the same seed.

use serde::{Deserialize, Serialize};

/// Modulus (2^31 - 1)
const MODULUS: i64 = 2_147_483_647;
/// Multiplier
const MULTIPLIER: i64 = 16_807;

/// Multiplicative congruential RNG producing floats in [0, 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedState")]
pub struct ParkMiller {
    state: i64,
}

/// Serialized form; folded through `ParkMiller::new` on load
#[derive(Deserialize)]
struct SavedState {
    state: i64,
}

impl From<SavedState> for ParkMiller {
    fn from(saved: SavedState) -> Self {
        Self::new(saved.state)
    }
}

impl ParkMiller {
    /// Create a generator from any integer seed.
    ///
    /// Zero and negative seeds are folded into `[1, 2^31 - 2]` by adding
    /// `MODULUS - 1` to the truncated remainder.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        // Only `seed % MODULUS == -(MODULUS - 1)` lands here; zero is a fixed point.
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Advance and return a value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Uniform index in `0..bound` (`bound` must be non-zero)
    pub fn index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }

    /// Fisher-Yates shuffle, last element down to index 1
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}
