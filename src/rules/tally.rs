//! Running win/loss/draw counts for a session.

use serde::{Deserialize, Serialize};

use super::Outcome;

/// Counters owned by one session. Starts at zero every run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one round.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Rounds counted so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Overall verdict. Draws do not count toward either side.
    #[must_use]
    pub fn verdict(&self) -> Outcome {
        Outcome::from_ordering(self.wins.cmp(&self.losses))
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} wins, {} losses, {} draws",
            self.wins, self.losses, self.draws
        )
    }
}

impl Extend<Outcome> for Tally {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(iter);
        tally
    }
}
