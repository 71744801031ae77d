//! Session loop.
//!
//! A `Session` owns everything that changes while a game is played:
//! the random source, the tally and both item pools. Nothing is global,
//! so a session can be driven round by round from tests with scripted
//! input and randomness.
//!
//! ```
//! use dice_duel::{GameConfig, GameRng, Session};
//!
//! let config = GameConfig::classic().with_rounds(3);
//! let mut session = Session::new(config, GameRng::new(7)).unwrap();
//!
//! let mut input = "".as_bytes();
//! let mut out = Vec::<u8>::new();
//! let tally = session.run(&mut input, &mut out).unwrap();
//!
//! assert_eq!(tally.rounds(), 3);
//! ```

use log::{debug, info};
use std::io::{BufRead, Write};

use super::battle::{battle, BattleReport};
use super::selection::{choose_items, ItemChoice};
use crate::core::{Die, GameConfig, RandomSource, Result};
use crate::items::ItemPool;
use crate::rules::{Outcome, Tally};

/// State of one game from first round to verdict.
pub struct Session<R> {
    config: GameConfig,
    die: Die,
    rng: R,
    tally: Tally,
    player_items: ItemPool,
    cpu_items: ItemPool,
    history: Vec<BattleReport>,
}

impl<R: RandomSource> Session<R> {
    /// Start a session. Fails only if the configured die is invalid.
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        let die = config.die()?;
        let (player_items, cpu_items) = if config.use_items {
            (
                config.items.iter().cloned().collect(),
                config.items.iter().cloned().collect(),
            )
        } else {
            (ItemPool::new(), ItemPool::new())
        };

        Ok(Self {
            config,
            die,
            rng,
            tally: Tally::new(),
            player_items,
            cpu_items,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Items the player has not used yet.
    pub fn player_items(&self) -> &ItemPool {
        &self.player_items
    }

    /// Items the CPU has not used yet.
    pub fn cpu_items(&self) -> &ItemPool {
        &self.cpu_items
    }

    /// Reports of every round played so far, in order.
    pub fn history(&self) -> &[BattleReport] {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// True once the configured number of rounds has been played.
    pub fn is_finished(&self) -> bool {
        self.rounds_played() >= self.config.rounds
    }

    /// Print the opening banner.
    pub fn intro<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Hello from dice-duel!")?;
        writeln!(out, "You and the CPU each roll a {}; the higher roll wins.", self.die)?;
        writeln!(
            out,
            "Best of {} rounds: whoever wins more rounds wins the match.",
            self.config.rounds
        )?;
        Ok(())
    }

    /// Play one round: choose items, battle, record the outcome.
    ///
    /// Items chosen this round are removed from their pools before the
    /// dice are rolled, so they can never be chosen again.
    pub fn play_round<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<Outcome>
    where
        I: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let round = self.rounds_played() + 1;
        writeln!(out, "### Round {} ###", round)?;

        let choice = if self.config.use_items {
            choose_items(
                &self.player_items,
                &self.cpu_items,
                &mut self.rng,
                input,
                out,
            )?
        } else {
            ItemChoice::default()
        };

        let player_item = choice.player.and_then(|i| self.player_items.take(i));
        let cpu_item = choice.cpu.and_then(|i| self.cpu_items.take(i));
        if let Some(item) = &player_item {
            debug!("round {}: player uses {}", round, item.name);
        }
        if let Some(item) = &cpu_item {
            debug!("round {}: cpu uses {}", round, item.name);
        }

        let report = battle(
            self.die,
            &mut self.rng,
            player_item.as_ref(),
            cpu_item.as_ref(),
        );
        report.render(out)?;

        let outcome = report.outcome;
        self.tally.record(outcome);
        self.history.push(report);
        debug!("round {}: {} ({})", round, outcome, self.tally);

        Ok(outcome)
    }

    /// Print the final tally and verdict.
    pub fn finish<W: Write + ?Sized>(&self, out: &mut W) -> Result<Outcome> {
        let verdict = self.tally.verdict();
        writeln!(out)?;
        writeln!(out, "## Final results ##")?;
        writeln!(out, "{}", self.tally)?;
        writeln!(out, "{}", verdict.verdict_message())?;
        info!("session over: {} ({})", verdict, self.tally);
        Ok(verdict)
    }

    /// Play the whole session and return the final tally.
    pub fn run<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<Tally>
    where
        I: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        info!(
            "starting session: {} rounds, {}, items {}",
            self.config.rounds,
            self.die,
            if self.config.use_items { "on" } else { "off" }
        );

        self.intro(out)?;
        while !self.is_finished() {
            self.play_round(input, out)?;
        }
        self.finish(out)?;

        if self.config.wait_for_ack {
            write!(out, "Press Enter to exit...")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
        }
        out.flush()?;

        Ok(self.tally)
    }
}
