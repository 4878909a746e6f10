//! Random sources for the weapon draw.
//!
//! # Determinism
//!
//! Every source here is a stream owned by a single caller. Given the same
//! seed, [`PcgSource`] and a seeded [`RandSource`] produce the same sequence,
//! which is what replays and tests rely on. Concurrent callers each take
//! their own stream instead of sharing one.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::EngineConfig;

/// A stream of uniform samples in `[0, 100)`.
pub trait RandomSource {
    /// Draw the next sample, uniform over `[0, 100)`.
    fn sample_percent(&mut self) -> f64;

    /// Pick an index in `0..len` uniformly.
    ///
    /// Consumes exactly one sample. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on an empty range");
        let scaled = self.sample_percent() / EngineConfig::PERCENT_MAX * len as f64;
        (scaled as usize).min(len - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn sample_percent(&mut self) -> f64 {
        (**self).sample_percent()
    }
}

/// PCG random stream (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of state, 32-bit output, a single
/// multiply + xorshift + rotate per sample.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgSource {
    state: u64,
}

impl PcgSource {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// 2^32, the size of the output space.
    const OUTPUT_SPAN: f64 = 4_294_967_296.0;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Stream dedicated to one bruto's draws on one turn.
    ///
    /// See [`compute_seed`] for how the inputs are mixed.
    pub fn for_turn(game_seed: u64, turn: u64, bruto: u32, context: u32) -> Self {
        Self::new(compute_seed(game_seed, turn, bruto, context))
    }

    /// Advance the state by one LCG step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        Self::output(self.state)
    }
}

impl RandomSource for PcgSource {
    fn sample_percent(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::OUTPUT_SPAN * EngineConfig::PERCENT_MAX
    }
}

/// Adapter exposing any [`rand`] generator as a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RandSource<R> {
    rng: R,
}

impl<R: RngCore> RandSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandSource<ChaCha8Rng> {
    /// Reproducible ChaCha8 stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RandSource<R> {
    fn sample_percent(&mut self) -> f64 {
        self.rng.gen_range(0.0..EngineConfig::PERCENT_MAX)
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Intended for tests that need exact draw outcomes.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Samples must lie in `[0, 100)` and the list must not be empty.
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        let samples = samples.into();
        assert!(!samples.is_empty(), "ScriptedSource needs at least one sample");
        Self { samples, cursor: 0 }
    }

    /// Number of samples consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn sample_percent(&mut self) -> f64 {
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}

/// Compute a deterministic seed from combat components.
///
/// # Arguments
///
/// * `game_seed` - Base seed fixed when the fight starts
/// * `turn` - Turn number
/// * `bruto` - Bruto drawing a weapon
/// * `context` - Separates independent streams within the same turn
pub fn compute_seed(game_seed: u64, turn: u64, bruto: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;
    hash ^= turn.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(bruto).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
