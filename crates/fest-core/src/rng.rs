//! Seeded RNG for the few places the core samples randomness.
//!
//! The only randomness in the core is the per-fan security classification
//! (a small share of fans need an extended check).  Coordinators own a
//! `SimRng` seeded from `FestivalConfig::seed`, so a run with the same seed
//! and the same admission order classifies identically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream for one subsystem (e.g. one coordinator)
    /// so that adding draws in one place does not shift another's sequence.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed ^ stream.wrapping_mul(MIXING_CONSTANT)))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
