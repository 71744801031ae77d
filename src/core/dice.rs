//! Dice.
//!
//! A `Die` has a validated side count, so rolling never fails.
//! `Die::rolls` yields a lazy, finite sequence that consumes the
//! random source as it is iterated.

use std::iter::FusedIterator;

use super::error::{GameError, Result};
use super::rng::RandomSource;

/// Side count of a standard die.
pub const DEFAULT_SIDES: u32 = 6;

/// A fair die with `sides` faces numbered `1..=sides`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// Standard six-sided die.
    pub const D6: Die = Die { sides: DEFAULT_SIDES };

    /// Create a die. Fails for `sides < 1`.
    pub fn new(sides: u32) -> Result<Self> {
        if sides == 0 {
            return Err(GameError::InvalidSides(sides));
        }
        Ok(Self { sides })
    }

    /// Number of faces.
    #[must_use]
    pub const fn sides(self) -> u32 {
        self.sides
    }

    /// Roll once. The result lies in `1..=sides`.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> u32 {
        rng.roll(self.sides)
    }

    /// Roll `count` times, lazily.
    ///
    /// ```
    /// use dice_duel::core::{Die, GameRng};
    ///
    /// let mut rng = GameRng::new(42);
    /// let rolls: Vec<u32> = Die::D6.rolls(&mut rng, 4).collect();
    ///
    /// assert_eq!(rolls.len(), 4);
    /// assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    /// ```
    pub fn rolls<R: RandomSource + ?Sized>(self, rng: &mut R, count: usize) -> Rolls<'_, R> {
        Rolls {
            die: self,
            rng,
            remaining: count,
        }
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::D6
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides)
    }
}

/// Iterator over a fixed number of rolls. See `Die::rolls`.
pub struct Rolls<'a, R: ?Sized> {
    die: Die,
    rng: &'a mut R,
    remaining: usize,
}

impl<R: RandomSource + ?Sized> Iterator for Rolls<'_, R> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.die.roll(&mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: RandomSource + ?Sized> ExactSizeIterator for Rolls<'_, R> {}

impl<R: RandomSource + ?Sized> FusedIterator for Rolls<'_, R> {}
