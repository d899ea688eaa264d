//! # Dice
//!
//! Random primitives shared by every generation stage.
//!
//! A [`Dice`] owns its random source, so two generation runs never share
//! state. Seed it explicitly for reproducible output, or from entropy for a
//! fresh sector every process.

use crate::{SectorgenError, SectorgenResult};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Bits kept from each 64-bit draw for coin tosses.
const COIN_BITS: u32 = 63;

/// Seeded dice roller.
///
/// # Examples
///
/// ```
/// use sectorgen::Dice;
///
/// let mut dice = Dice::seeded(7);
/// let roll = dice.roll_sum(2);
/// assert!((2..=12).contains(&roll));
///
/// let flux = dice.flux();
/// assert!((-5..=5).contains(&flux));
/// ```
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
    coin_cache: u64,
    coin_remaining: u32,
}

impl Dice {
    /// Creates dice seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates dice with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates dice from a seed when one is given, otherwise from entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            coin_cache: 0,
            coin_remaining: 0,
        }
    }

    /// Sum of `count` six-sided dice.
    pub fn roll_sum(&mut self, count: u32) -> i32 {
        (0..count).map(|_| self.rng.gen_range(1..=6)).sum()
    }

    /// Difference of two independent d6 rolls, in -5..=5.
    pub fn flux(&mut self) -> i32 {
        self.roll_sum(1) - self.roll_sum(1)
    }

    /// Uniform integer in `[min, max]`.
    ///
    /// Requires `max > min`; anything else is a wiring defect and is
    /// reported rather than silently rolled.
    ///
    /// # Examples
    ///
    /// ```
    /// use sectorgen::Dice;
    ///
    /// let mut dice = Dice::seeded(1);
    /// assert!(dice.roll_range(1, 20).is_ok());
    /// assert!(dice.roll_range(5, 5).is_err());
    /// ```
    pub fn roll_range(&mut self, min: i32, max: i32) -> SectorgenResult<i32> {
        if max <= min {
            return Err(SectorgenError::InvalidRange { min, max });
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Fair coin toss served from a cache of 63 random bits.
    pub fn coin_toss(&mut self) -> bool {
        if self.coin_remaining == 0 {
            self.coin_cache = self.rng.next_u64() >> (64 - COIN_BITS);
            self.coin_remaining = COIN_BITS;
        }

        let result = self.coin_cache & 0x01 == 1;
        self.coin_cache >>= 1;
        self.coin_remaining -= 1;

        result
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Clamps `value` into `floor..=ceiling`.
pub fn apply_range(value: i32, floor: i32, ceiling: i32) -> i32 {
    value.min(ceiling).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roll_sum_bounds() {
        let mut dice = Dice::seeded(12345);
        for _ in 0..1000 {
            let roll = dice.roll_sum(2);
            assert!((2..=12).contains(&roll));
        }
        assert_eq!(dice.roll_sum(0), 0);
    }

    #[test]
    fn test_flux_covers_full_range() {
        let mut dice = Dice::seeded(12345);
        let seen: HashSet<i32> = (0..5000).map(|_| dice.flux()).collect();
        assert_eq!(seen, (-5..=5).collect());
    }

    #[test]
    fn test_roll_range_rejects_inverted_bounds() {
        let mut dice = Dice::seeded(1);
        assert!(matches!(
            dice.roll_range(9, 0),
            Err(SectorgenError::InvalidRange { min: 9, max: 0 })
        ));
        for _ in 0..500 {
            let value = dice.roll_range(0, 9).unwrap();
            assert!((0..=9).contains(&value));
        }
    }

    #[test]
    fn test_coin_toss_uses_63_bits_per_draw() {
        let mut dice = Dice::seeded(99);
        let mut rng = StdRng::seed_from_u64(99);

        let mut expected = Vec::new();
        for _ in 0..2 {
            let bits = rng.next_u64() >> 1;
            expected.extend((0..COIN_BITS).map(|i| (bits >> i) & 1 == 1));
        }

        let tosses: Vec<bool> = (0..2 * COIN_BITS).map(|_| dice.coin_toss()).collect();
        assert_eq!(tosses, expected);
        assert_eq!(dice.coin_remaining, 0);

        // The next toss starts a third draw
        let third = rng.next_u64() >> 1;
        assert_eq!(dice.coin_toss(), third & 1 == 1);
        assert_eq!(dice.coin_remaining, COIN_BITS - 1);
    }

    #[test]
    fn test_seeded_dice_are_reproducible() {
        let mut a = Dice::seeded(2024);
        let mut b = Dice::seeded(2024);
        for _ in 0..100 {
            assert_eq!(a.roll_sum(3), b.roll_sum(3));
            assert_eq!(a.coin_toss(), b.coin_toss());
        }
    }

    #[test]
    fn test_apply_range() {
        assert_eq!(apply_range(-3, 0, 10), 0);
        assert_eq!(apply_range(14, 0, 10), 10);
        assert_eq!(apply_range(4, 0, 10), 4);
    }
}
