//! A simple pseudorandom number generator.
//!
//! Specifically, SplitMix64 from Steele, Lea, and Flood's *Fast splittable pseudorandom number
//! generators*, implemented against the [RngCore](rand_core::RngCore) trait.
//!
//! The algebra only asks for randomness when it tags a fresh wedge with a conditional id, so the
//! single requirement here is a cheap generator with no state beyond a word. Each
//! [context](crate::context) stores one, seeded by a constant, which keeps runs reproducible
//! while still distinguishing otherwise-identical wedges. Supplying a different source of rng is
//! a matter of instantiating [GenericContext](crate::context::GenericContext) differently.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// A single word of generator state.
pub struct SplitMix64 {
    state: u64,
}

impl RngCore for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);

        let mut mixed = self.state;
        mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        mixed ^ (mixed >> 31)
    }

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        SplitMix64 {
            state: u64::from_le_bytes(seed),
        }
    }
}

impl Default for SplitMix64 {
    fn default() -> Self {
        Self::from_seed(0_u64.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut left = SplitMix64::from_seed(1066_u64.to_le_bytes());
        let mut right = SplitMix64::from_seed(1066_u64.to_le_bytes());

        for _ in 0..64 {
            assert_eq!(left.next_u64(), right.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut left = SplitMix64::from_seed(1_u64.to_le_bytes());
        let mut right = SplitMix64::from_seed(2_u64.to_le_bytes());

        let diverged = (0..8).any(|_| left.next_u64() != right.next_u64());
        assert!(diverged);
    }

    #[test]
    fn zero_seed_is_not_a_fixed_point() {
        let mut generator = SplitMix64::default();
        assert_ne!(generator.next_u64(), generator.next_u64());
    }
}
