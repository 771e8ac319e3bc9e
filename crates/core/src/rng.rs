//! RNG module - random piece generation
//!
//! Pieces get a kind drawn uniformly from the 4-symbol alphabet and an id
//! supplied by the caller. The generator is seeded once per game; a fixed
//! seed reproduces the same kind sequence, which the tests rely on.
//!
//! Also provides a simple LCG so the core stays free of RNG dependencies.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{Piece, PieceKind};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift keeps the high bits. The low bits of a power-of-two
    /// LCG cycle with a tiny period (bit 0 alternates), so `% 4` would
    /// repeat the same four kinds forever.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Seed derived from the wall clock, for one-per-process seeding.
pub fn seed_from_time() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    (nanos ^ (nanos >> 32)) as u32
}

/// Produces pieces with uniformly random kinds
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Build a piece with the given id and a random kind.
    pub fn generate(&mut self, id: u32) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        log::trace!("generated piece {} (kind {})", id, kind.as_str());
        Piece::new(kind, id)
    }

    /// Seed this generator was created with (for replaying a game)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
