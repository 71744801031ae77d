//! Core building blocks: randomness, dice, configuration, errors.
//!
//! Nothing here knows about rounds or items being chosen; the `game`
//! module drives these pieces.

pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use rng::{GameRng, RandomSource};
pub use dice::{Die, Rolls, DEFAULT_SIDES};
pub use config::{GameConfig, DEFAULT_ROUNDS};
pub use error::{GameError, Result};
