//! Player-scoped random source.
//!
//! Every stochastic operation takes the source explicitly as
//! `&mut dyn RngSource`; there is no hidden global generator. Seeding a
//! [`PcgRng`] with the same value replays the exact same outcomes, and
//! [`ScriptedRng`] replays a hand-written sequence of draws.
//!
//! # Determinism
//!
//! Implementations must be deterministic: given the same seed, they must
//! produce the same sequence of values.

use std::collections::VecDeque;

/// Source of uniformly distributed integers.
///
/// Only [`next_u32`](RngSource::next_u32) is required; the derived draws are
/// provided in terms of it and may be overridden by sources that want to
/// control them directly.
pub trait RngSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32() % span)
    }

    /// Uniform value in `[0, n)`. Returns 0 when `n == 0`.
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.next_u32() % n
    }

    /// Succeeds with `percent` percent probability.
    fn chance(&mut self, percent: u32) -> bool {
        self.below(100) < percent
    }
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }

    fn below(&mut self, n: u32) -> u32 {
        (**self).below(n)
    }

    fn chance(&mut self, percent: u32) -> bool {
        (**self).chance(percent)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds a generator for one actor from the session seed.
    ///
    /// See [`compute_seed`] for how the inputs are mixed.
    pub fn for_actor(game_seed: u64, actor_id: u32) -> Self {
        Self::new(compute_seed(game_seed, 0, actor_id, 0))
    }

    /// Current internal state, for persisting a session mid-run.
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
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
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Compute deterministic seed from session components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at session start
/// * `nonce` - Sequence number (e.g. number of maps entered)
/// * `actor_id` - Entity owning the generator
/// * `context` - Additional discriminator for independent streams
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Replays a fixed sequence of draw results.
///
/// Each queued value is the *result* of the next draw rather than raw
/// generator output:
///
/// - `range(min, max)` returns the value clamped into `[min, max]`
/// - `below(n)` returns the value clamped into `[0, n)`
/// - `chance(percent)` treats the value as a d100 roll in `[0, 100)` and
///   succeeds when it is below `percent`
///
/// Once the script is exhausted every draw yields 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    script: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws still queued.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn pop(&mut self) -> u32 {
        self.consumed += 1;
        self.script.pop_front().unwrap_or(0)
    }
}

impl RngSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.pop()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        let value = self.pop();
        if min >= max {
            return min;
        }
        value.clamp(min, max)
    }

    fn below(&mut self, n: u32) -> u32 {
        let value = self.pop();
        value.min(n.saturating_sub(1))
    }

    fn chance(&mut self, percent: u32) -> bool {
        self.below(100) < percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let first: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);

        let mut c = PcgRng::new(43);
        let third: Vec<u32> = (0..16).map(|_| c.next_u32()).collect();
        assert_ne!(first, third);
    }

    #[test]
    fn pcg_advances_state() {
        let mut rng = PcgRng::new(7);
        let before = rng.state();
        rng.next_u32();
        assert_ne!(rng.state(), before);
    }

    #[test]
    fn range_stays_inclusive() {
        let mut rng = PcgRng::new(1234);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let value = rng.range(3, 5);
            assert!((3..=5).contains(&value));
            seen_min |= value == 3;
            seen_max |= value == 5;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn degenerate_ranges() {
        let mut rng = PcgRng::new(9);
        assert_eq!(rng.range(4, 4), 4);
        assert_eq!(rng.range(9, 2), 9);
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.below(1), 0);
        assert!(!rng.chance(0));
        assert!(rng.chance(100));
    }

    #[test]
    fn scripted_rng_replays_results() {
        let mut rng = ScriptedRng::new([12, 97, 69, 70, 200]);
        assert_eq!(rng.range(7, 13), 12);
        assert_eq!(rng.below(100), 97);
        assert!(rng.chance(70));
        assert!(!rng.chance(70));
        assert_eq!(rng.range(4, 9), 9);
        assert_eq!(rng.consumed(), 5);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.next_u32(), 0);
    }

    #[test]
    fn seeds_differ_by_actor() {
        assert_ne!(compute_seed(1, 0, 0, 0), compute_seed(1, 0, 1, 0));
        assert_eq!(
            PcgRng::for_actor(99, 0).state(),
            compute_seed(99, 0, 0, 0)
        );
    }
}
