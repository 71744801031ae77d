//! Round outcome from the player's point of view.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result of one round (or of a whole session) for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Compare effective values: higher wins, equal draws.
    #[must_use]
    pub fn decide(player_value: u32, cpu_value: u32) -> Self {
        Self::from_ordering(player_value.cmp(&cpu_value))
    }

    /// Map a player-versus-CPU ordering to an outcome.
    #[must_use]
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Lose,
        }
    }

    /// The same result seen from the other side.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Line printed after a single round.
    #[must_use]
    pub fn round_message(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Draw => "So close! It's a draw.",
            Outcome::Lose => "Too bad. You lose...",
        }
    }

    /// Line printed for the session verdict.
    #[must_use]
    pub fn verdict_message(self) -> &'static str {
        match self {
            Outcome::Win => "Congratulations! You won the match!!",
            Outcome::Draw => "So close! The match is a draw.",
            Outcome::Lose => "Too bad. You lost the match...",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
            Outcome::Draw => "DRAW",
        };
        f.write_str(label)
    }
}
