//! Random sources for battle rolls.
//!
//! Every roll in a battle (damage variance, critical checks, flee attempts,
//! monster selection) goes through [`BattleRng`], so a battle can be replayed
//! exactly by injecting a seeded [`PcgRng`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform rolls in `[0, 1)`.
pub trait BattleRng: Send {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[min, max)`.
    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    /// Returns `true` with the given probability.
    ///
    /// Probabilities at or above 1.0 always succeed, at or below 0.0 never do.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

impl<R: BattleRng + ?Sized> BattleRng for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Implementation of PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
/// Same seed, same sequence.
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
    }

    /// Advance the LCG: `state' = state × multiplier + increment (mod 2^64)`.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl BattleRng for PcgRng {
    fn next_f64(&mut self) -> f64 {
        // 53 bits of precision from two outputs.
        let hi = (self.next_u32() >> 5) as u64;
        let lo = (self.next_u32() >> 6) as u64;
        ((hi << 26) | lo) as f64 / (1u64 << 53) as f64
    }
}

/// Non-deterministic source seeded from OS entropy.
#[derive(Debug)]
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRng for EntropyRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.r#gen::<f64>()
    }
}

/// Derive an independent seed for one battle from a base seed.
///
/// `stream` separates consumers sharing a base seed (e.g. battle index in a
/// campaign), `context` separates independent rolls inside one consumer.
pub fn compute_seed(base_seed: u64, stream: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = base_seed;
    hash ^= stream.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
