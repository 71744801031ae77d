//! Session configuration.
//!
//! `GameConfig` describes one session: how many rounds, what die, whether
//! items are in play and which ones each side starts with. The binary has
//! no flags; overrides come from environment variables:
//!
//! - `DICE_ROUNDS`: number of rounds (default 3)
//! - `DICE_SIDES`: faces on the die (default 6)
//! - `DICE_SEED`: fixed RNG seed for a reproducible session
//! - `DICE_ITEMS`: enable item selection (default on)
//! - `DICE_PAUSE`: wait for Enter before exiting (default off)

use serde::{Deserialize, Serialize};

use super::dice::{Die, DEFAULT_SIDES};
use super::error::{GameError, Result};
use crate::items::{standard_items, Item};

/// Rounds in the reference configuration.
pub const DEFAULT_ROUNDS: usize = 3;

pub const ENV_ROUNDS: &str = "DICE_ROUNDS";
pub const ENV_SIDES: &str = "DICE_SIDES";
pub const ENV_SEED: &str = "DICE_SEED";
pub const ENV_ITEMS: &str = "DICE_ITEMS";
pub const ENV_PAUSE: &str = "DICE_PAUSE";

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds to play.
    pub rounds: usize,

    /// Faces on the die. Validated when the session builds its `Die`.
    pub sides: u32,

    /// RNG seed. `None` means draw one from entropy.
    pub seed: Option<u64>,

    /// Offer item selection each round.
    pub use_items: bool,

    /// Wait for an acknowledgment line before the program exits.
    pub wait_for_ack: bool,

    /// Items each side starts with (both sides get their own copy).
    pub items: Vec<Item>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            sides: DEFAULT_SIDES,
            seed: None,
            use_items: true,
            wait_for_ack: false,
            items: standard_items(),
        }
    }
}

impl GameConfig {
    /// Create the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain dice roll: one round, no items.
    pub fn plain() -> Self {
        Self::default().with_rounds(1).without_items()
    }

    /// Round tracking without items.
    pub fn classic() -> Self {
        Self::default().without_items()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the die side count.
    #[must_use]
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the starting items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self.use_items = true;
        self
    }

    /// Disable item selection.
    #[must_use]
    pub fn without_items(mut self) -> Self {
        self.use_items = false;
        self
    }

    /// Wait for Enter before exiting.
    #[must_use]
    pub fn with_ack(mut self) -> Self {
        self.wait_for_ack = true;
        self
    }

    /// Build the die this configuration describes.
    pub fn die(&self) -> Result<Die> {
        Die::new(self.sides)
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, starting from the defaults.
    ///
    /// Missing or blank keys keep their default; malformed values fail.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        if let Some(value) = get(ENV_ROUNDS) {
            config.rounds = value
                .parse()
                .map_err(|_| GameError::invalid_config(ENV_ROUNDS, &value))?;
        }
        if let Some(value) = get(ENV_SIDES) {
            config.sides = value
                .parse()
                .map_err(|_| GameError::invalid_config(ENV_SIDES, &value))?;
            Die::new(config.sides)?;
        }
        if let Some(value) = get(ENV_SEED) {
            config.seed = Some(
                value
                    .parse()
                    .map_err(|_| GameError::invalid_config(ENV_SEED, &value))?,
            );
        }
        if let Some(value) = get(ENV_ITEMS) {
            config.use_items = parse_flag(ENV_ITEMS, &value)?;
        }
        if let Some(value) = get(ENV_PAUSE) {
            config.wait_for_ack = parse_flag(ENV_PAUSE, &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(GameError::invalid_config(key, value)),
    }
}
