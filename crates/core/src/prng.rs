//! Deterministic Xorshift64 PRNG.
//!
//! Every random draw in the workspace goes through this type so that a `u64`
//! run seed fully determines the output. The core algorithm is pure integer
//! arithmetic and produces the same sequence on every platform.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseSeed;

/// Xorshift64 with shifts (13, 7, 17).
///
/// A zero seed is replaced by a fixed non-zero constant, since zero is a
/// fixed point of the recurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1) built from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Draws one value and builds noise tables from its top 16 bits.
    ///
    /// The draw is passed through a splitmix64 finaliser first. Raw
    /// Xorshift output for small seeds has all-zero high bits, which would
    /// map every such seed onto the same tables.
    pub fn next_noise_seed(&mut self) -> NoiseSeed {
        let bits = splitmix64(self.next_u64()) >> 48;
        NoiseSeed::new(f64::from(bits as u16))
    }
}

fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every recipe that relies on seed 42 renders differently.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert!((0..3).all(|_| rng.next_u64() != 0));
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "sequences diverged at index {i}");
        }
    }

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = Xorshift64::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "next_f64() = {v} at iteration {i}");
        }
    }

    #[test]
    fn next_noise_seed_golden_value_for_seed_42() {
        // splitmix64(45_454_805_674) >> 48 == 41_986
        assert_eq!(Xorshift64::new(42).next_noise_seed(), NoiseSeed::new(41_986.0));
    }

    #[test]
    fn small_run_seeds_give_distinct_tables() {
        let zero_tables = NoiseSeed::new(0.0);
        let mut seen = HashSet::new();
        for run_seed in 1..=256_u64 {
            let tables = Xorshift64::new(run_seed).next_noise_seed();
            assert_ne!(tables, zero_tables, "run seed {run_seed} fell back to seed 0");
            // perm[0] carries the high byte and perm[1] the low byte.
            seen.insert((tables.perm()[0], tables.perm()[1]));
        }
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn next_noise_seed_advances_the_generator() {
        let mut rng = Xorshift64::new(9);
        let first = rng.next_noise_seed();
        let second = rng.next_noise_seed();
        assert_ne!(first, second);
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64(), "diverged at index {i}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v));
                }
            }
        }
    }
}
