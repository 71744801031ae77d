//! # dice-duel
//!
//! A turn-based dice game against a computer opponent.
//!
//! Each round both sides roll a die; the higher effective value wins and
//! equal values draw. Before rolling, each side may spend one single-use
//! item that modifies its roll. After a fixed number of rounds the side
//! with more round wins takes the match.
//!
//! ## Modules
//!
//! - `core`: randomness, dice, configuration, errors
//! - `items`: roll modifiers and per-side pools
//! - `rules`: round outcomes and the session tally
//! - `game`: item selection, battles and the session loop
//! - `logging`: terminal logger for the binary
//!
//! All randomness flows through the `RandomSource` trait, so a session
//! can be replayed from a seed or scripted outright in tests.

pub mod core;
pub mod items;
pub mod rules;
pub mod game;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Die, Rolls, DEFAULT_SIDES,
    GameRng, RandomSource,
    GameConfig, DEFAULT_ROUNDS,
    GameError, Result,
};

pub use crate::items::{standard_items, Item, ItemEffect, ItemPool};

pub use crate::rules::{Outcome, Tally};

pub use crate::game::{
    battle, choose_items, cpu_choice, parse_selection,
    BattleReport, ItemChoice, Session, Side, SideRoll,
};
