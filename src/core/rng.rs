//! Random number generation for dice and CPU decisions.
//!
//! ## Key Features
//!
//! - **Injectable**: game logic only sees the `RandomSource` trait, so tests
//!   can script every roll and choice
//! - **Deterministic**: `GameRng` with the same seed replays the same session
//!
//! ```
//! use dice_duel::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.roll(6), rng2.roll(6));
//! assert_eq!(rng1.pick(3), rng2.pick(3));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by the game.
///
/// Both methods must return uniformly distributed values.
pub trait RandomSource {
    /// Roll a die: uniform integer in `1..=sides`.
    ///
    /// Callers guarantee `sides >= 1` (see `Die::new`).
    fn roll(&mut self, sides: u32) -> u32;

    /// Pick an index: uniform integer in `0..len`.
    ///
    /// Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Seeded game RNG.
///
/// Uses ChaCha8 for speed while keeping a high quality stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a seed drawn from OS entropy.
    ///
    /// The seed is kept so the session can be replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
