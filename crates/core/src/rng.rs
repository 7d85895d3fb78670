//! RNG module - deterministic piece generation
//!
//! Pieces come from a small LCG so that a seed fully determines a game. Two
//! randomizers sit on top of it: independent uniform picks (the default) and
//! the 7-bag, where every bag holds each kind exactly once.

use crate::rules::Randomizer;
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
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of upcoming pieces.
///
/// `peek` never mutates, and always agrees with the following `draw`.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    randomizer: Randomizer,
    rng: SimpleRng,
    /// Current bag (7-bag only)
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl PieceQueue {
    pub fn new(seed: u32, randomizer: Randomizer) -> Self {
        Self {
            randomizer,
            rng: SimpleRng::new(seed),
            bag: PieceKind::ALL,
            // Start exhausted so the first draw shuffles a fresh bag.
            bag_index: 7,
        }
    }

    pub fn randomizer(&self) -> Randomizer {
        self.randomizer
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        // Run the draw on a copy of the RNG; the copy is discarded.
        let mut preview = self.clone();
        preview.draw()
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Randomizer::SevenBag => {
                if self.bag_index >= self.bag.len() {
                    self.bag = PieceKind::ALL;
                    self.rng.shuffle(&mut self.bag);
                    self.bag_index = 0;
                }
                let piece = self.bag[self.bag_index];
                self.bag_index += 1;
                piece
            }
        }
    }

    /// Current RNG state; seeding a new queue with it continues the stream
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1, Randomizer::Uniform)
    }
}
