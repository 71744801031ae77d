//! Item definitions and the standard catalogue.

use serde::{Deserialize, Serialize};

/// Transformation applied to a raw roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Add `amount` to the roll, then clamp to `cap` if one is set.
    Bonus { amount: u32, cap: Option<u32> },
}

impl ItemEffect {
    /// Compute the effective value for a raw roll.
    #[must_use]
    pub fn apply(self, raw: u32) -> u32 {
        match self {
            ItemEffect::Bonus { amount, cap } => {
                let boosted = raw.saturating_add(amount);
                match cap {
                    Some(cap) => boosted.min(cap),
                    None => boosted,
                }
            }
        }
    }
}

/// A named roll modifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Short name shown in listings and battle lines.
    pub name: String,

    /// One-line explanation shown when choosing.
    pub description: String,

    pub effect: ItemEffect,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect,
        }
    }

    /// `1up`: +1 to the roll, no cap.
    pub fn one_up() -> Self {
        Self::new(
            "1up",
            "Adds 1 to your roll.",
            ItemEffect::Bonus { amount: 1, cap: None },
        )
    }

    /// `2up`: +2 to the roll, capped at 6.
    pub fn two_up() -> Self {
        Self::new(
            "2up",
            "Adds 2 to your roll, but the total is capped at 6.",
            ItemEffect::Bonus { amount: 2, cap: Some(6) },
        )
    }

    /// Effective value for a raw roll.
    #[must_use]
    pub fn apply(&self, raw: u32) -> u32 {
        self.effect.apply(raw)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// The items each side starts a session with.
pub fn standard_items() -> Vec<Item> {
    vec![Item::one_up(), Item::two_up()]
}
