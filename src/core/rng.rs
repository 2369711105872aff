//! RNG module - seedable randomness and the chance-weighted piece bag
//!
//! Piece selection is a self-balancing weighted draw rather than a
//! shuffled 7-bag: every draw nudges all weights up a little and knocks
//! the selected weight down a lot, so pieces that have not appeared for
//! a while grow steadily more likely and immediate repeats are strongly
//! discouraged without ever being hard-guaranteed away.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Weight every kind starts over from when the pool drains to zero
const BASELINE_WEIGHT: i32 = 15;
/// Added to every weight on each draw
const DRAW_BIAS: i32 = 2;
/// Subtracted from the selected kind's weight
const PICK_PENALTY: i32 = 14;

/// Self-balancing weighted piece generator
#[derive(Debug, Clone)]
pub struct ChanceBag {
    /// One non-negative weight per kind, in [`PieceKind::ALL`] order
    weights: [i32; 7],
    rng: SimpleRng,
}

impl ChanceBag {
    pub fn new(seed: u32) -> Self {
        Self {
            weights: [0; 7],
            rng: SimpleRng::new(seed),
        }
    }

    /// Zero all weights, as at the start of a session
    pub fn reset_weights(&mut self) {
        self.weights = [0; 7];
    }

    pub fn weights(&self) -> &[i32; 7] {
        &self.weights
    }

    /// Draw the next piece kind.
    ///
    /// The uniform draw value ranges over the weight total as it was
    /// before the bias pass; the cumulative walk then runs over the
    /// biased weights, which is what tilts selection toward kinds that
    /// were not picked recently.
    pub fn draw(&mut self) -> PieceKind {
        let mut total: i32 = self.weights.iter().sum();
        if total == 0 {
            self.weights = [BASELINE_WEIGHT; 7];
            total = BASELINE_WEIGHT * 7;
        }

        let value = self.rng.next_range(total as u32) as i32;

        for weight in &mut self.weights {
            *weight += DRAW_BIAS;
        }

        let picked = Self::walk_cumulative(&self.weights, value);
        self.penalize(picked);
        picked
    }

    /// First kind whose cumulative weight exceeds the draw value
    fn walk_cumulative(weights: &[i32; 7], value: i32) -> PieceKind {
        let mut cumulative = 0;
        for kind in PieceKind::ALL {
            cumulative += weights[kind.index()];
            if value < cumulative {
                return kind;
            }
        }
        // value is always below the biased total
        PieceKind::Z
    }

    /// Knock the picked weight down, spilling any deficit onto random
    /// kinds that still have weight left
    fn penalize(&mut self, picked: PieceKind) {
        let idx = picked.index();
        self.weights[idx] -= PICK_PENALTY;

        if self.weights[idx] >= 0 {
            return;
        }
        let mut deficit = -self.weights[idx];
        self.weights[idx] = 0;

        // The bias pass left the other six kinds with at least 12 weight
        // combined, which always covers the deficit.
        while deficit > 0 {
            let i = self.rng.next_range(7) as usize;
            if self.weights[i] > 0 {
                self.weights[i] -= 1;
                deficit -= 1;
            }
        }
    }
}
