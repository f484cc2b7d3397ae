//! Seedable piece randomizer
//!
//! Every draw is an independent uniform choice among the 7 types; the same
//! piece may repeat back to back. Seeding keeps the engine deterministic
//! under test.

use crate::tetromino::TetrominoType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform piece source
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: ChaCha8Rng,
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceRng {
    /// Create a randomizer seeded from process entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Fixed-seed source for reproducible games and tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece type
    pub fn next(&mut self) -> TetrominoType {
        let types = TetrominoType::all();
        types[self.rng.gen_range(0..types.len())]
    }
}
