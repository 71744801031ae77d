//! Shared test helpers.

use std::collections::VecDeque;

use dice_duel::RandomSource;

/// Random source that replays fixed rolls and picks.
///
/// Panics if the game asks for more values than were scripted, or if a
/// scripted value falls outside the requested range.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<u32>,
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(rolls: &[u32], picks: &[usize]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            picks: picks.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self.rolls.pop_front().expect("ran out of scripted rolls");
        assert!((1..=sides).contains(&value), "scripted roll {} outside 1..={}", value, sides);
        value
    }

    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks.pop_front().expect("ran out of scripted picks");
        assert!(value < len, "scripted pick {} outside 0..{}", value, len);
        value
    }
}

/// Run a whole session and capture its output.
pub fn run_session<R: RandomSource>(
    session: &mut dice_duel::Session<R>,
    input: &str,
) -> (dice_duel::Tally, String) {
    let mut input = input.as_bytes();
    let mut out = Vec::new();
    let tally = session.run(&mut input, &mut out).expect("session failed");
    (tally, String::from_utf8(out).expect("output is utf-8"))
}
