//! Deterministic random number generation for demo rosters.
//!
//! RULE: Nothing here may call any platform RNG.
//! Every draw comes from a Pcg64Mcg seeded from the caller's seed,
//! so the same seed always yields the same roster.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct RosterRng {
    inner: Pcg64Mcg,
}

impl RosterRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'s, T>(&mut self, items: &'s [T]) -> &'s T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}
