#![forbid(unsafe_code)]

//! Injectable randomness for delays and glyph selection.
//!
//! Both sources of variation in a pass, per-cell start delays and the
//! glyphs shown while scrambling, draw from a [`RandomSource`] supplied at
//! engine construction. Production uses [`XorShift64`]; tests script exact
//! draws with [`ScriptedRandom`] to make timing and glyph selection
//! deterministic.
//!
//! # Invariants
//!
//! 1. `next_below(bound)` is always `< bound` for `bound > 0`.
//! 2. `next_delay(max)` is inclusive of both `Duration::ZERO` and `max`.
//! 3. A given seed yields the same draw sequence on every run.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Source of uniform random draws.
pub trait RandomSource {
    /// Next raw 64-bit draw.
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "next_below called with zero bound");
        self.next_u64() % bound
    }

    /// Uniform index into a collection of `len` elements.
    fn next_index(&mut self, len: usize) -> usize {
        self.next_below(len as u64) as usize
    }

    /// Uniform millisecond-granular delay in `[0, max]`, inclusive.
    fn next_delay(&mut self, max: Duration) -> Duration {
        Duration::from_millis(self.next_below(max.as_millis() as u64 + 1))
    }
}

// ---------------------------------------------------------------------------
// XorShift64
// ---------------------------------------------------------------------------

/// Small, allocation-free xorshift64 generator.
///
/// Not cryptographic; it only has to decorrelate cell timings. Seeded
/// explicitly so hosts control reproducibility.
#[derive(Debug, Clone, Copy)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Create a generator from `seed`. A zero seed is remapped to a fixed
    /// non-zero constant (xorshift has an all-zero fixed point).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

// ---------------------------------------------------------------------------
// ScriptedRandom
// ---------------------------------------------------------------------------

/// Test double that replays a fixed script of draws.
///
/// `next_u64` returns the scripted values in order, cycling when the script
/// is exhausted so callers need not count draws exactly. Since `next_below`
/// reduces modulo the bound, a scripted value `v < bound` comes back
/// unchanged: script the draw you want to observe.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<u64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source replaying `script`. An empty script always draws 0.
    #[must_use]
    pub fn new(script: Vec<u64>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u64(&mut self) -> u64 {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_750: Duration = Duration::from_millis(750);

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift64::new(42);
        let mut b = XorShift64::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seed_different_sequence() {
        let mut a = XorShift64::new(42);
        let mut b = XorShift64::new(43);
        let drawn_a: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let drawn_b: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(drawn_a, drawn_b);
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = XorShift64::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn next_below_respects_bound() {
        let mut rng = XorShift64::new(7);
        for _ in 0..1_000 {
            assert!(rng.next_below(10) < 10);
        }
    }

    #[test]
    fn next_delay_inclusive_range() {
        let mut rng = XorShift64::new(9);
        for _ in 0..1_000 {
            let delay = rng.next_delay(MS_750);
            assert!(delay <= MS_750);
        }
    }

    #[test]
    fn next_delay_zero_max_is_zero() {
        let mut rng = XorShift64::new(9);
        assert_eq!(rng.next_delay(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut rng = ScriptedRandom::new(vec![3, 1, 4]);
        assert_eq!(rng.next_u64(), 3);
        assert_eq!(rng.next_u64(), 1);
        assert_eq!(rng.next_u64(), 4);
        // Cycles once exhausted.
        assert_eq!(rng.next_u64(), 3);
    }

    #[test]
    fn scripted_values_pass_through_next_below() {
        let mut rng = ScriptedRandom::new(vec![5]);
        assert_eq!(rng.next_below(100), 5);
    }

    #[test]
    fn empty_script_draws_zero() {
        let mut rng = ScriptedRandom::new(Vec::new());
        assert_eq!(rng.next_u64(), 0);
        assert_eq!(rng.next_delay(MS_750), Duration::ZERO);
    }
}
