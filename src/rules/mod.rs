//! Game rules: round outcomes and the session tally.
//!
//! A round is decided only by comparing the two effective values.
//! The session verdict compares wins against losses; draws are neutral.

pub mod outcome;
pub mod tally;

pub use outcome::Outcome;
pub use tally::Tally;
